//! Temporary root directories for router tests.

use std::fs;
use std::path::Path;

use mdnotes_axum::AxumContext;
use mdnotes_core::{FileFilter, NotesConfig};
use tempfile::TempDir;

/// A set of temporary roots, first root first.
pub struct TestRoots {
    dirs: Vec<TempDir>,
}

impl TestRoots {
    pub fn new(count: usize) -> Self {
        Self {
            dirs: (0..count).map(|_| TempDir::new().unwrap()).collect(),
        }
    }

    pub fn root(&self, index: usize) -> &Path {
        self.dirs[index].path()
    }

    pub fn write(&self, index: usize, relative: &str, contents: &str) -> &Self {
        let path = self.root(index).join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    pub fn mkdir(&self, index: usize, relative: &str) -> &Self {
        fs::create_dir_all(self.root(index).join(relative)).unwrap();
        self
    }

    pub fn context(&self) -> AxumContext {
        self.context_with(FileFilter::markdown())
    }

    pub fn context_with(&self, filter: FileFilter) -> AxumContext {
        let notes = NotesConfig::from_paths(self.dirs.iter().map(TempDir::path))
            .unwrap()
            .with_filter(filter);
        AxumContext::new(notes)
    }
}
