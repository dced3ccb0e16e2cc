//! Immutable serving configuration: the ordered roots and the file filter.
//!
//! Built once at startup and shared by reference for the process lifetime.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

/// Extension listed by default when not showing every file.
pub const DEFAULT_EXTENSION: &str = ".md";

/// Errors raised while building a [`NotesConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No roots were configured.
    #[error("At least one root directory is required")]
    NoRoots,

    /// An empty path was provided as a root.
    #[error("Root path cannot be empty")]
    EmptyRoot,

    /// A root was given as a relative path.
    #[error("Root {0} must be an absolute path")]
    RelativeRoot(PathBuf),

    /// A root does not exist or could not be canonicalized.
    #[error("Root {path} could not be opened: {reason}")]
    RootNotFound { path: PathBuf, reason: String },

    /// A root exists but is not a directory.
    #[error("Root {0} exists but is not a directory")]
    RootNotADirectory(PathBuf),
}

/// One top-level directory exposed as part of the merged tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root(PathBuf);

impl Root {
    /// Wrap an absolute path without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyRoot);
        }
        if !path.is_absolute() {
            return Err(ConfigError::RelativeRoot(path));
        }
        Ok(Self(path))
    }

    /// Canonicalize `path` and require it to be an existing directory.
    ///
    /// This is the startup constructor; relative paths are resolved
    /// against the current directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyRoot);
        }
        let canonical = fs::canonicalize(path).map_err(|e| ConfigError::RootNotFound {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !canonical.is_dir() {
            return Err(ConfigError::RootNotADirectory(canonical));
        }
        Self::new(canonical)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for Root {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Which files a directory listing shows. Directories are never filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileFilter {
    /// Show every file.
    All,
    /// Show files whose name ends in one of these suffixes.
    Extensions(Vec<String>),
}

impl FileFilter {
    /// Filter for content files only (`.md`).
    pub fn markdown() -> Self {
        Self::Extensions(vec![DEFAULT_EXTENSION.to_string()])
    }

    /// Build a filter from the configured extensions.
    ///
    /// Extensions are normalized to start with `.`; an empty list falls
    /// back to [`FileFilter::markdown`].
    pub fn from_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions: Vec<String> = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().to_string())
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect();

        if extensions.is_empty() {
            Self::markdown()
        } else {
            Self::Extensions(extensions)
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Extensions(extensions) => {
                extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
            }
        }
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::markdown()
    }
}

/// Roots and listing filter, fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct NotesConfig {
    roots: Arc<[Root]>,
    filter: FileFilter,
}

impl NotesConfig {
    /// Create a config from already-validated roots, in precedence order.
    pub fn new(roots: Vec<Root>) -> Result<Self, ConfigError> {
        if roots.is_empty() {
            return Err(ConfigError::NoRoots);
        }
        Ok(Self {
            roots: roots.into(),
            filter: FileFilter::default(),
        })
    }

    /// Open every path with [`Root::open`], keeping the given order.
    pub fn from_paths<I, P>(paths: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let roots = paths
            .into_iter()
            .map(Root::open)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(roots)
    }

    /// Set the listing filter.
    #[must_use]
    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Roots in precedence order; the first root wins ties.
    pub fn roots(&self) -> &[Root] {
        &self.roots
    }

    pub const fn filter(&self) -> &FileFilter {
        &self.filter
    }
}
