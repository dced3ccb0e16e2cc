//! Client-visible paths into the merged tree.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::OverlayError;

/// A normalized, slash-separated path as seen by a client.
///
/// Normalization drops empty and `.` segments and applies `..` against
/// the segments before it, clamped at the root, so a logical path can
/// never name anything above a root. Whether the raw input ended in `/`
/// is kept: a trailing slash asks for directory semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalPath {
    segments: Vec<String>,
    trailing_slash: bool,
}

impl LogicalPath {
    /// Parse and normalize a raw client path.
    pub fn parse(raw: &str) -> Result<Self, OverlayError> {
        if raw.is_empty() {
            return Err(OverlayError::EmptyPath);
        }
        if !raw.starts_with('/') {
            return Err(OverlayError::RelativePath(raw.to_string()));
        }

        let mut segments: Vec<String> = Vec::new();
        for part in raw.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                name if name.contains('\0') => {
                    return Err(OverlayError::NulByte(name.to_string()));
                }
                name => segments.push(name.to_string()),
            }
        }

        Ok(Self {
            segments,
            trailing_slash: raw.ends_with('/'),
        })
    }

    /// The root of the merged tree, `/`.
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
            trailing_slash: true,
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the client asked for directory semantics.
    pub const fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, or `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The containing directory, carrying a directory hint.
    ///
    /// The parent of the root is the root.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self {
            segments,
            trailing_slash: true,
        }
    }

    /// Join this path's segments onto a concrete root directory.
    pub fn join_onto(&self, root: &Path) -> PathBuf {
        let mut concrete = root.to_path_buf();
        concrete.extend(&self.segments);
        concrete
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        if self.trailing_slash {
            f.write_str("/")?;
        }
        Ok(())
    }
}
