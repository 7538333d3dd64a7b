//! Test utilities: temporary directory trees and an in-memory filesystem.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

use crate::fs::{EntryKind, EntryMetadata, FileSystem};

/// A temporary directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed modification time used by `MemoryFs` entries: 2021-03-04 05:06:07 UTC.
pub fn fixed_mtime() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_614_834_367)
}

/// Metadata for an in-memory entry.
pub fn metadata(kind: EntryKind, permissions: u32, link_count: u64, size: u64) -> EntryMetadata {
    EntryMetadata {
        kind,
        permissions,
        link_count,
        uid: 1000,
        gid: 1000,
        size,
        modified: fixed_mtime(),
    }
}

/// In-memory `FileSystem` with deterministic metadata.
///
/// Parent directories are created implicitly. Directory listings come back in
/// reverse name order so callers cannot rely on enumeration order.
#[derive(Debug, Default, Clone)]
pub struct MemoryFs {
    nodes: BTreeMap<PathBuf, Option<EntryMetadata>>,
    unreadable: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(self, path: &str) -> Self {
        self.entry(path, metadata(EntryKind::Directory, 0o755, 2, 4096))
    }

    pub fn file(self, path: &str, size: u64) -> Self {
        self.file_with_links(path, size, 1)
    }

    pub fn file_with_links(self, path: &str, size: u64, links: u64) -> Self {
        self.entry(path, metadata(EntryKind::Regular, 0o644, links, size))
    }

    /// Add an entry with explicit metadata.
    pub fn entry(mut self, path: &str, meta: EntryMetadata) -> Self {
        let path = PathBuf::from(path);
        self.add_parents(&path);
        self.nodes.insert(path, Some(meta));
        self
    }

    /// Add an entry that is listed but whose probe fails.
    pub fn broken(mut self, path: &str) -> Self {
        let path = PathBuf::from(path);
        self.add_parents(&path);
        self.nodes.insert(path, None);
        self
    }

    /// Add a directory that probes fine but cannot be enumerated.
    pub fn unreadable(mut self, path: &str) -> Self {
        self = self.dir(path);
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    fn add_parents(&mut self, path: &Path) {
        let mut parent = path.parent();
        while let Some(p) = parent {
            if p.as_os_str().is_empty() {
                break;
            }
            self.nodes
                .entry(p.to_path_buf())
                .or_insert_with(|| Some(metadata(EntryKind::Directory, 0o755, 2, 4096)));
            parent = p.parent();
        }
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{}: No such file or directory", path.display()),
    )
}

impl FileSystem for MemoryFs {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let path = normalize(path);
        if self.unreadable.contains(&path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Permission denied",
            ));
        }
        match self.nodes.get(&path) {
            Some(Some(meta)) if meta.is_dir() => {}
            Some(_) => {
                return Err(io::Error::other("Not a directory"));
            }
            None => return Err(not_found(&path)),
        }

        let mut names = vec![OsString::from("."), OsString::from("..")];
        names.extend(
            self.nodes
                .keys()
                .rev()
                .filter(|p| p.parent() == Some(path.as_path()))
                .filter_map(|p| p.file_name().map(|n| n.to_os_string())),
        );
        Ok(names)
    }

    fn probe(&self, path: &Path) -> io::Result<EntryMetadata> {
        if matches!(path.components().next_back(), Some(Component::ParentDir)) {
            return Ok(metadata(EntryKind::Directory, 0o755, 2, 4096));
        }
        match self.nodes.get(&normalize(path)) {
            Some(Some(meta)) => Ok(meta.clone()),
            Some(None) => Err(not_found(path)),
            None => Err(not_found(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_lists_children_only() {
        let fs = MemoryFs::new().file("a/x", 1).file("a/b/y", 1);
        let names = fs.list_entries(Path::new("a")).unwrap();
        let names: Vec<_> = names.iter().map(|n| n.to_string_lossy().into_owned()).collect();
        assert_eq!(names, vec![".", "..", "x", "b"]);
    }

    #[test]
    fn test_memory_fs_self_and_parent_probe() {
        let fs = MemoryFs::new().dir("a");
        assert!(fs.probe(Path::new("a/.")).unwrap().is_dir());
        assert!(fs.probe(Path::new("a/..")).unwrap().is_dir());
    }

    #[test]
    fn test_test_dir_creates_nested_files() {
        let dir = TestDir::new();
        let file = dir.add_file("sub/inner.txt", "x");
        assert!(file.exists());
        assert!(dir.path().join("sub").is_dir());
    }
}
