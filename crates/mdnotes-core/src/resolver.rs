//! Multi-root path resolution.
//!
//! Roots act as ordered layers. For a logical path every root is statted
//! in order, and the collected hits are run through a small decision table:
//!
//! | files | dirs | trailing `/` | result                         |
//! |-------|------|--------------|--------------------------------|
//! | 0     | 0    | any          | not found                      |
//! | ≥1    | 0    | any          | first file                     |
//! | 0     | 1    | any          | that directory                 |
//! | 0     | ≥2   | any          | all directories, root order    |
//! | ≥1    | ≥1   | yes          | all directories, root order    |
//! | ≥1    | ≥1   | no           | first file                     |
//!
//! Anything else is an internal error.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::Root;
use crate::error::OverlayError;
use crate::fs::{EntryKind, FsProvider};
use crate::logical::LogicalPath;

pub(crate) const LOG_TARGET: &str = "mdnotes.overlay";

/// The result of resolving a logical path against one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub exists: bool,
    pub is_directory: bool,
    pub concrete_path: PathBuf,
}

/// Aggregate resolution of one logical path over all roots.
///
/// When `is_directory` is false there is exactly one concrete path: files
/// are never merged across roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    logical: LogicalPath,
    concrete_paths: Vec<PathBuf>,
    exists: bool,
    is_directory: bool,
}

impl Resolution {
    fn not_found(logical: LogicalPath) -> Self {
        Self {
            logical,
            concrete_paths: Vec::new(),
            exists: false,
            is_directory: false,
        }
    }

    fn file(logical: LogicalPath, path: PathBuf) -> Self {
        Self {
            logical,
            concrete_paths: vec![path],
            exists: true,
            is_directory: false,
        }
    }

    fn directories(logical: LogicalPath, paths: Vec<PathBuf>) -> Self {
        Self {
            logical,
            concrete_paths: paths,
            exists: true,
            is_directory: true,
        }
    }

    /// The logical path this resolution answers.
    pub const fn logical(&self) -> &LogicalPath {
        &self.logical
    }

    /// Concrete locations in root order.
    pub fn concrete_paths(&self) -> &[PathBuf] {
        &self.concrete_paths
    }

    pub const fn exists(&self) -> bool {
        self.exists
    }

    pub const fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// The single concrete path of a resolved file.
    pub fn file_path(&self) -> Option<&Path> {
        if self.exists && !self.is_directory {
            self.concrete_paths.first().map(PathBuf::as_path)
        } else {
            None
        }
    }
}

/// Which row of the decision table a set of completions falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    NotFound,
    FirstFile,
    SingleDirectory,
    MergedDirectories,
}

fn decide(files: usize, dirs: usize, trailing_slash: bool) -> Option<Decision> {
    match (files, dirs, trailing_slash) {
        (0, 0, _) => Some(Decision::NotFound),
        (f, 0, _) if f >= 1 => Some(Decision::FirstFile),
        (0, 1, _) => Some(Decision::SingleDirectory),
        (0, d, _) if d >= 2 => Some(Decision::MergedDirectories),
        (f, d, true) if f >= 1 && d >= 1 => Some(Decision::MergedDirectories),
        (f, d, false) if f >= 1 && d >= 1 => Some(Decision::FirstFile),
        _ => None,
    }
}

/// Resolves logical paths against an ordered list of roots.
pub struct PathResolver<'a, F: FsProvider> {
    roots: &'a [Root],
    fs: &'a F,
}

impl<'a, F: FsProvider> PathResolver<'a, F> {
    pub const fn new(roots: &'a [Root], fs: &'a F) -> Self {
        Self { roots, fs }
    }

    pub const fn fs(&self) -> &'a F {
        self.fs
    }

    /// Stat the logical path under a single root.
    ///
    /// A "not a directory" failure means some leading segment is a file in
    /// this root; that root simply has no entry here.
    pub fn resolve_in(
        &self,
        root: &Root,
        logical: &LogicalPath,
    ) -> Result<ResolvedEntry, OverlayError> {
        let concrete_path = logical.join_onto(root.path());
        match self.fs.stat(&concrete_path) {
            Ok(kind) => Ok(ResolvedEntry {
                exists: true,
                is_directory: kind == EntryKind::Directory,
                concrete_path,
            }),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                tracing::trace!(
                    target: LOG_TARGET,
                    path = %concrete_path.display(),
                    kind = ?e.kind(),
                    "no entry in root"
                );
                Ok(ResolvedEntry {
                    exists: false,
                    is_directory: false,
                    concrete_path,
                })
            }
            Err(source) => Err(OverlayError::Stat {
                path: concrete_path,
                source,
            }),
        }
    }

    /// Resolve a logical path over all roots.
    pub fn resolve(&self, logical: &LogicalPath) -> Result<Resolution, OverlayError> {
        let mut completions = Vec::with_capacity(self.roots.len());
        for root in self.roots {
            let entry = self.resolve_in(root, logical)?;
            if entry.exists {
                completions.push(entry);
            }
        }

        let files = completions.iter().filter(|e| !e.is_directory).count();
        let dirs = completions.len() - files;

        let decision = decide(files, dirs, logical.has_trailing_slash()).ok_or_else(|| {
            OverlayError::InvariantViolation {
                logical: logical.to_string(),
                detail: format!("{files} file and {dirs} directory completions"),
            }
        })?;

        tracing::debug!(
            target: LOG_TARGET,
            logical = %logical,
            files,
            dirs,
            ?decision,
            "resolved"
        );

        let resolution = match decision {
            Decision::NotFound => Resolution::not_found(logical.clone()),
            Decision::FirstFile => {
                let first = completions
                    .into_iter()
                    .find(|e| !e.is_directory)
                    .ok_or_else(|| OverlayError::InvariantViolation {
                        logical: logical.to_string(),
                        detail: "file precedence chosen without a file completion".to_string(),
                    })?;
                Resolution::file(logical.clone(), first.concrete_path)
            }
            Decision::SingleDirectory | Decision::MergedDirectories => {
                let paths = completions
                    .into_iter()
                    .filter(|e| e.is_directory)
                    .map(|e| e.concrete_path)
                    .collect();
                Resolution::directories(logical.clone(), paths)
            }
        };

        Ok(resolution)
    }
}
