//! Filesystem access: directory enumeration and per-entry metadata probes
//!
//! The listing engine only talks to the filesystem through the `FileSystem`
//! trait, so tests can substitute an in-memory tree.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;
use std::time::SystemTime;

/// Type of a filesystem object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    BlockDevice,
    CharDevice,
    Socket,
    Fifo,
    Unknown,
}

impl EntryKind {
    /// First character of the long-format mode string.
    pub fn sigil(self) -> char {
        match self {
            EntryKind::Regular => '-',
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::BlockDevice => 'b',
            EntryKind::CharDevice => 'c',
            EntryKind::Socket => 's',
            EntryKind::Fifo => 'p',
            EntryKind::Unknown => '?',
        }
    }

    fn from_file_type(ft: fs::FileType) -> Self {
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_file() {
            EntryKind::Regular
        } else if ft.is_block_device() {
            EntryKind::BlockDevice
        } else if ft.is_char_device() {
            EntryKind::CharDevice
        } else if ft.is_socket() {
            EntryKind::Socket
        } else if ft.is_fifo() {
            EntryKind::Fifo
        } else {
            EntryKind::Unknown
        }
    }
}

/// Metadata for one probed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    pub kind: EntryKind,
    /// Lower nine permission bits (owner/group/other rwx).
    pub permissions: u32,
    pub link_count: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub modified: SystemTime,
}

impl EntryMetadata {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Directory enumeration and metadata queries used by the listing engine.
pub trait FileSystem {
    /// Names of every entry in `path`, including `.` and `..`, in any order.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Metadata for `path`. Symbolic links are not followed.
    fn probe(&self, path: &Path) -> io::Result<EntryMetadata>;
}

/// `FileSystem` backed by the real operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<OsString>> {
        // read_dir never yields the self and parent links
        let mut names = vec![OsString::from("."), OsString::from("..")];
        for entry in fs::read_dir(path)? {
            names.push(entry?.file_name());
        }
        Ok(names)
    }

    fn probe(&self, path: &Path) -> io::Result<EntryMetadata> {
        let meta = fs::symlink_metadata(path)?;
        Ok(EntryMetadata {
            kind: EntryKind::from_file_type(meta.file_type()),
            permissions: meta.mode() & 0o777,
            link_count: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
            modified: meta.modified()?,
        })
    }
}
