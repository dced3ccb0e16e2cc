//! Note tree service: resolve, list and read in one call per request.
//!
//! This is the surface adapters use. It owns the immutable config and
//! the filesystem provider, and builds a short-lived resolver and merger
//! for every call.

use crate::breadcrumb::{Breadcrumb, build_breadcrumbs};
use crate::config::NotesConfig;
use crate::error::OverlayError;
use crate::fs::{FsProvider, SystemFs};
use crate::listing::{Listing, ListingMerger};
use crate::logical::LogicalPath;
use crate::resolver::{PathResolver, Resolution};

/// Everything a page needs for one logical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteView {
    /// No root has an entry at this path.
    Missing,
    /// A (possibly merged) directory.
    Directory {
        breadcrumbs: Vec<Breadcrumb>,
        listing: Listing,
    },
    /// A single file together with its parent's listing.
    Note {
        breadcrumbs: Vec<Breadcrumb>,
        name: String,
        content: Vec<u8>,
        listing: Listing,
    },
}

/// The merged tree over the configured roots.
#[derive(Debug, Clone)]
pub struct NoteTree<F: FsProvider = SystemFs> {
    config: NotesConfig,
    fs: F,
}

impl NoteTree<SystemFs> {
    pub fn new(config: NotesConfig) -> Self {
        Self::with_fs(config, SystemFs)
    }
}

impl<F: FsProvider> NoteTree<F> {
    pub fn with_fs(config: NotesConfig, fs: F) -> Self {
        Self { config, fs }
    }

    pub const fn config(&self) -> &NotesConfig {
        &self.config
    }

    fn resolver(&self) -> PathResolver<'_, F> {
        PathResolver::new(self.config.roots(), &self.fs)
    }

    pub fn resolve(&self, logical: &LogicalPath) -> Result<Resolution, OverlayError> {
        self.resolver().resolve(logical)
    }

    pub fn list(&self, resolution: &Resolution) -> Result<Listing, OverlayError> {
        let resolver = self.resolver();
        ListingMerger::new(&resolver, self.config.filter()).list(resolution)
    }

    /// Read the contents of a resolved file.
    pub fn read_file(&self, resolution: &Resolution) -> Result<Vec<u8>, OverlayError> {
        let path = resolution
            .file_path()
            .ok_or_else(|| OverlayError::InvariantViolation {
                logical: resolution.logical().to_string(),
                detail: "read requested for a path that is not a resolved file".to_string(),
            })?;
        self.fs
            .read_file(path)
            .map_err(|source| OverlayError::ReadFile {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Resolve a logical path and gather what its page shows.
    pub fn view(&self, logical: &LogicalPath) -> Result<NoteView, OverlayError> {
        let resolution = self.resolve(logical)?;
        if !resolution.exists() {
            return Ok(NoteView::Missing);
        }

        let listing = self.list(&resolution)?;

        if resolution.is_directory() {
            return Ok(NoteView::Directory {
                breadcrumbs: build_breadcrumbs(logical.segments()),
                listing,
            });
        }

        let content = self.read_file(&resolution)?;
        Ok(NoteView::Note {
            breadcrumbs: build_breadcrumbs(logical.parent().segments()),
            name: logical.file_name().unwrap_or_default().to_string(),
            content,
            listing,
        })
    }
}
