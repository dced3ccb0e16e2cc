//! Filesystem provider trait for testable resolution and listing.

use std::fs;
use std::io;
use std::path::Path;

use crate::resolver::LOG_TARGET;

/// Type of an entry on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub const fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// One child returned by [`FsProvider::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntryInfo {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Trait for filesystem operations (injectable for testing).
///
/// All calls block the calling thread.
#[cfg_attr(test, mockall::automock)]
pub trait FsProvider: Send + Sync {
    /// Stat a path, following symlinks.
    fn stat(&self, path: &Path) -> io::Result<EntryKind>;

    /// Direct children of a directory, in the order the OS returns them.
    ///
    /// Children whose names are not valid UTF-8 are left out.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Production filesystem provider that uses real filesystem operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFs;

impl FsProvider for SystemFs {
    fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        let metadata = fs::metadata(path)?;
        Ok(if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // A name that is not UTF-8 can never be requested by a client
            let Ok(name) = entry.file_name().into_string() else {
                tracing::trace!(
                    target: LOG_TARGET,
                    path = %entry.path().display(),
                    "skipping entry with a non-UTF-8 name"
                );
                continue;
            };
            // Follow symlinks so a linked directory lists as a directory
            let is_dir = match entry.file_type()? {
                ft if ft.is_symlink() => fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()),
                ft => ft.is_dir(),
            };
            let kind = if is_dir {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(DirEntryInfo::new(name, kind));
        }
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn system_fs_stats_files_and_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("note.md"), "# hi").unwrap();

        let fs_provider = SystemFs;
        assert_eq!(
            fs_provider.stat(&dir.path().join("sub")).unwrap(),
            EntryKind::Directory
        );
        assert_eq!(
            fs_provider.stat(&dir.path().join("note.md")).unwrap(),
            EntryKind::File
        );
        let missing = fs_provider.stat(&dir.path().join("missing")).unwrap_err();
        assert_eq!(missing.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn stat_through_a_file_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a"), "plain file").unwrap();

        let err = SystemFs.stat(&dir.path().join("a").join("b")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotADirectory);
    }

    #[test]
    fn system_fs_reads_children_and_contents() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("note.md"), "# hi").unwrap();

        let mut entries = SystemFs.read_dir(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            entries,
            vec![
                DirEntryInfo::new("note.md", EntryKind::File),
                DirEntryInfo::new("sub", EntryKind::Directory),
            ]
        );
        assert_eq!(
            SystemFs.read_file(&dir.path().join("note.md")).unwrap(),
            b"# hi"
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn read_dir_skips_names_that_are_not_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("good.md"), "# ok").unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff.md")), "# bad").unwrap();

        let entries = SystemFs.read_dir(dir.path()).unwrap();
        assert_eq!(entries, vec![DirEntryInfo::new("good.md", EntryKind::File)]);
    }
}
