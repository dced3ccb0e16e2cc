//! Main CLI parser and top-level argument handling.
//!
//! Every flag has an environment fallback so the server can be configured
//! from a `.env` file or container environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use mdnotes_axum::{DEFAULT_ADDR, ServerConfig};
use mdnotes_core::{DEFAULT_EXTENSION, FileFilter, NotesConfig};

use crate::error::CliError;

/// Command-line interface for serving note directories over HTTP.
#[derive(Debug, Parser)]
#[command(name = "mdnotes")]
#[command(about = "Serve one or more Markdown note directories as a single browsable tree")]
#[command(version)]
pub struct Cli {
    /// Root directories, highest precedence first
    #[arg(
        value_name = "ROOTS",
        env = "MDNOTES_ROOTS",
        value_delimiter = ':',
        default_value = "/notes"
    )]
    pub roots: Vec<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "MDNOTES_ADDR", default_value_t = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// List every file, not only content files
    #[arg(long = "show-all", env = "MDNOTES_SHOW_ALL")]
    pub show_all: bool,

    /// Extensions of content files shown in listings
    #[arg(
        long = "ext",
        env = "MDNOTES_EXTENSIONS",
        value_delimiter = ',',
        default_value = DEFAULT_EXTENSION
    )]
    pub extensions: Vec<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Listing filter selected by `--show-all` and `--ext`.
    pub fn file_filter(&self) -> FileFilter {
        if self.show_all {
            FileFilter::All
        } else {
            FileFilter::from_extensions(&self.extensions)
        }
    }

    /// Open the roots and build the server configuration.
    pub fn server_config(&self) -> Result<ServerConfig, CliError> {
        let notes = NotesConfig::from_paths(&self.roots)?.with_filter(self.file_filter());
        Ok(ServerConfig::new(notes).with_addr(self.addr))
    }
}
