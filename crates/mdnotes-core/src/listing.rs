//! Merging directory listings across roots.

use crate::config::FileFilter;
use crate::error::OverlayError;
use crate::fs::FsProvider;
use crate::resolver::{LOG_TARGET, PathResolver, Resolution};

/// Children of one logical directory, gathered from every contributing root.
///
/// Each root's entries are appended in root order. Within one root the
/// order is whatever the OS directory read returns, which is not sorted
/// and may differ between runs; call [`Listing::sorted`] for display.
/// Names are not deduplicated across roots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub files: Vec<String>,
    pub dirs: Vec<String>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// Sort files and directories by name.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.files.sort();
        self.dirs.sort();
        self
    }
}

/// Gathers children of resolved directories, filtering files only.
pub struct ListingMerger<'r, 'a, F: FsProvider> {
    resolver: &'r PathResolver<'a, F>,
    filter: &'r FileFilter,
}

impl<'r, 'a, F: FsProvider> ListingMerger<'r, 'a, F> {
    pub const fn new(resolver: &'r PathResolver<'a, F>, filter: &'r FileFilter) -> Self {
        Self { resolver, filter }
    }

    /// List a resolution.
    ///
    /// For a file, the parent directory is re-resolved as a directory and
    /// listed instead, giving the file's siblings. Any read failure aborts
    /// the whole listing.
    pub fn list(&self, resolution: &Resolution) -> Result<Listing, OverlayError> {
        if resolution.is_directory() {
            return self.list_directories(resolution);
        }

        if !resolution.exists() {
            return Ok(Listing::default());
        }

        let parent = self.resolver.resolve(&resolution.logical().parent())?;
        if !parent.is_directory() {
            // The tree changed between the two resolutions
            tracing::debug!(
                target: LOG_TARGET,
                logical = %parent.logical(),
                "parent no longer resolves to a directory"
            );
            return Ok(Listing::default());
        }
        self.list_directories(&parent)
    }

    fn list_directories(&self, resolution: &Resolution) -> Result<Listing, OverlayError> {
        let mut listing = Listing::default();
        for dir in resolution.concrete_paths() {
            let entries =
                self.resolver
                    .fs()
                    .read_dir(dir)
                    .map_err(|source| OverlayError::ListingRead {
                        path: dir.clone(),
                        source,
                    })?;

            for entry in entries {
                if entry.kind.is_directory() {
                    listing.dirs.push(entry.name);
                } else if self.filter.matches(&entry.name) {
                    listing.files.push(entry.name);
                }
            }
        }
        Ok(listing)
    }
}
