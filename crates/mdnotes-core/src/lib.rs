//! Core of mdnotes: several directory trees served as one.
//!
//! Given an ordered list of roots, this crate decides which filesystem
//! entries answer a client path, how collisions between roots are broken,
//! and how directory listings from several roots combine into one view.
//!
//! # Design
//!
//! - Everything here is synchronous and request-local; the only shared
//!   state is the immutable [`NotesConfig`]
//! - Filesystem access goes through the [`FsProvider`] port so tests can
//!   inject failures
//! - HTTP, Markdown and HTML are adapter concerns (see `mdnotes-axum`)

#![deny(unused_crate_dependencies)]

pub mod breadcrumb;
pub mod config;
pub mod error;
pub mod fs;
pub mod listing;
pub mod logical;
pub mod resolver;
pub mod tree;

// Re-export commonly used types for convenience
pub use breadcrumb::{Breadcrumb, build_breadcrumbs};
pub use config::{ConfigError, DEFAULT_EXTENSION, FileFilter, NotesConfig, Root};
pub use error::OverlayError;
pub use fs::{DirEntryInfo, EntryKind, FsProvider, SystemFs};
pub use listing::{Listing, ListingMerger};
pub use logical::LogicalPath;
pub use resolver::{PathResolver, Resolution, ResolvedEntry};
pub use tree::{NoteTree, NoteView};
