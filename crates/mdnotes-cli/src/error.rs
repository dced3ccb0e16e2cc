//! CLI-specific error types and mappings.
//!
//! Maps configuration and server failures to exit codes and user-facing
//! messages.

use mdnotes_core::ConfigError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid roots or filter.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// The HTTP server failed to start or stopped with an error.
    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions (see sysexits.h):
    /// - 1: General error
    /// - 74: I/O error
    /// - 78: Configuration error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78, // EX_CONFIG
            Self::Io(_) => 74,     // EX_IOERR
            Self::Server(_) => 1,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::RootNotFound { .. } => Self::Io(err.to_string()),
            _ => Self::Config(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn exit_codes_follow_sysexits() {
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Server("x".into()).exit_code(), 1);
    }

    #[test]
    fn config_errors_are_classified() {
        let missing: CliError = ConfigError::RootNotFound {
            path: PathBuf::from("/nowhere"),
            reason: "No such file or directory".into(),
        }
        .into();
        assert!(matches!(missing, CliError::Io(_)));

        let none: CliError = ConfigError::NoRoots.into();
        assert!(matches!(none, CliError::Config(_)));
    }
}
