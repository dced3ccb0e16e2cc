//! Errors raised while resolving and listing the merged tree.
//!
//! A missing path is not an error: it is a successful [`Resolution`]
//! with `exists == false`.
//!
//! [`Resolution`]: crate::resolver::Resolution

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during resolution, listing and file reads.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// An empty logical path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// A logical path did not start with `/`.
    #[error("Logical path must start with '/': {0:?}")]
    RelativePath(String),

    /// A path segment contained a NUL byte, which no filesystem accepts.
    #[error("Path segment contains a NUL byte: {0:?}")]
    NulByte(String),

    /// Stat of a concrete path failed for a reason other than absence.
    #[error("Failed to stat {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading one root's directory failed; the whole listing is discarded.
    #[error("Failed to read directory {path}: {source}")]
    ListingRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a resolved file failed.
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The resolver reached a state outside its decision table.
    #[error("Resolver invariant violated for {logical}: {detail}")]
    InvariantViolation { logical: String, detail: String },
}

impl OverlayError {
    /// Whether the error was caused by the client's input rather than the server.
    pub const fn is_bad_request(&self) -> bool {
        matches!(
            self,
            Self::EmptyPath | Self::RelativePath(_) | Self::NulByte(_)
        )
    }
}
