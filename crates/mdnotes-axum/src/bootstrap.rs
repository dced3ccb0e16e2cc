//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the note tree and the HTTP server
//! are wired together.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use anyhow::{Context, Result};
use mdnotes_core::{NoteTree, NotesConfig};
use tokio::net::TcpListener;

use crate::routes::create_router;

/// Listen address used when none is configured.
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Roots and listing filter.
    pub notes: NotesConfig,
}

impl ServerConfig {
    /// Create config on the default address.
    pub fn new(notes: NotesConfig) -> Self {
        Self {
            addr: DEFAULT_ADDR,
            notes,
        }
    }

    /// Set the listen address.
    #[must_use]
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the note tree shared by every request.
#[derive(Debug)]
pub struct AxumContext {
    /// The merged tree over the configured roots.
    pub tree: NoteTree,
}

impl AxumContext {
    pub fn new(notes: NotesConfig) -> Self {
        Self {
            tree: NoteTree::new(notes),
        }
    }
}

/// Bind, serve until Ctrl-C, then drain in-flight requests.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    for (precedence, root) in config.notes.roots().iter().enumerate() {
        tracing::info!(
            target: "mdnotes.config",
            precedence,
            root = %root.path().display(),
            "serving root"
        );
    }
    tracing::info!(
        target: "mdnotes.config",
        filter = ?config.notes.filter(),
        "listing filter"
    );

    let app = create_router(AxumContext::new(config.notes));

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_addr_matches_constant() {
        let root = TempDir::new().unwrap();
        let notes = NotesConfig::from_paths([root.path()]).unwrap();
        let config = ServerConfig::new(notes);
        assert_eq!(config.addr, DEFAULT_ADDR);
        assert_eq!(config.addr.to_string(), "0.0.0.0:8080");

        let config = config.with_addr("127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.addr.port(), 9000);
    }
}
