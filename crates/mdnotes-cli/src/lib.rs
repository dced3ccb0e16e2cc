//! CLI adapter for mdnotes.
//!
//! Parses flags (with environment fallbacks), builds the immutable
//! serving configuration and hands it to the Axum server.

#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use dotenvy as _;
use tokio as _;

pub mod error;
pub mod logging;
pub mod parser;

pub use error::CliError;
pub use parser::Cli;

/// Build the configuration from parsed flags and serve until shutdown.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.server_config()?;
    tracing::debug!(
        addr = %config.addr,
        roots = config.notes.roots().len(),
        "configuration resolved"
    );
    mdnotes_axum::start_server(config)
        .await
        .map_err(|e| CliError::Server(format!("{e:#}")))
}
