//! Per-entry rendering: long-format lines and short-format name tokens

use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::fs::{EntryKind, EntryMetadata};
use crate::identity::IdentityLookup;
use crate::listing::{DirectoryEntry, DirectorySnapshot, ListingParams};

/// Rendering of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// A finished long-format line, printed immediately.
    Line(String),
    /// A bare name, appended to the directory's pending grid.
    Token(String),
}

/// Formats entries according to the listing mode.
pub struct EntryRenderer<'a, I: IdentityLookup> {
    identity: &'a I,
    long_format: bool,
}

impl<'a, I: IdentityLookup> EntryRenderer<'a, I> {
    pub fn new(identity: &'a I, params: &ListingParams) -> Self {
        Self {
            identity,
            long_format: params.long_format,
        }
    }

    /// Render `entry`, whose probe produced `meta`, using the alignment
    /// widths of the snapshot it belongs to.
    pub fn render(
        &self,
        entry: &DirectoryEntry,
        meta: &EntryMetadata,
        snapshot: &DirectorySnapshot,
    ) -> Rendered {
        if !self.long_format {
            return Rendered::Token(entry.name.clone());
        }

        Rendered::Line(format!(
            "{} {:>link_width$} {} {} {:>size_width$} {} {}",
            mode_string(meta.kind, meta.permissions),
            meta.link_count,
            self.identity.owner_name(meta.uid),
            self.identity.group_name(meta.gid),
            meta.size,
            format_timestamp(meta.modified),
            entry.name,
            link_width = snapshot.max_link_count_width,
            size_width = snapshot.max_size_width,
        ))
    }
}

/// Ten-character type and permission string, e.g. `drwxr-xr-x`.
pub fn mode_string(kind: EntryKind, permissions: u32) -> String {
    const BITS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];

    let mut s = String::with_capacity(10);
    s.push(kind.sigil());
    for (mask, c) in BITS {
        s.push(if permissions & mask != 0 { c } else { '-' });
    }
    s
}

/// Modification time as `Mon DD HH:MM` in local time.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%b %d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::identity::NumericIdentity;
    use crate::test_utils::{MemoryFs, fixed_mtime, metadata};

    struct Named;

    impl IdentityLookup for Named {
        fn owner_name(&self, _uid: u32) -> String {
            "user".to_string()
        }
        fn group_name(&self, _gid: u32) -> String {
            "group".to_string()
        }
    }

    fn entry(name: &str, meta: &EntryMetadata) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            full_path: PathBuf::from("d").join(name),
            metadata: Ok(meta.clone()),
        }
    }

    #[test]
    fn test_mode_string() {
        assert_eq!(mode_string(EntryKind::Regular, 0o644), "-rw-r--r--");
        assert_eq!(mode_string(EntryKind::Directory, 0o755), "drwxr-xr-x");
        assert_eq!(mode_string(EntryKind::Symlink, 0o777), "lrwxrwxrwx");
        assert_eq!(mode_string(EntryKind::Fifo, 0o600), "prw-------");
        assert_eq!(mode_string(EntryKind::Unknown, 0), "?---------");
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = format_timestamp(fixed_mtime());
        let parts: Vec<&str> = ts.split(' ').collect();
        assert_eq!(parts.len(), 3, "unexpected timestamp: {}", ts);
        assert_eq!(parts[0].len(), 3);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 5);
        assert_eq!(&parts[2][2..3], ":");
    }

    #[test]
    fn test_long_line_for_regular_file() {
        let fs = MemoryFs::new().file("d/notes.txt", 123);
        let snapshot = DirectorySnapshot::build(&fs, Path::new("d")).unwrap();
        let meta = metadata(EntryKind::Regular, 0o644, 1, 123);
        let renderer = EntryRenderer::new(&Named, &ListingParams::new(false, true, false));

        let rendered = renderer.render(&entry("notes.txt", &meta), &meta, &snapshot);
        let expected = format!(
            "-rw-r--r-- 1 user group  123 {} notes.txt",
            format_timestamp(fixed_mtime())
        );
        // size column is as wide as the 4096-byte directory entries
        assert_eq!(rendered, Rendered::Line(expected));
    }

    #[test]
    fn test_long_line_aligns_to_snapshot_widths() {
        let fs = MemoryFs::new()
            .file("d/a", 5)
            .file_with_links("d/b", 1_000_000, 10);
        let snapshot = DirectorySnapshot::build(&fs, Path::new("d")).unwrap();
        let renderer = EntryRenderer::new(&NumericIdentity, &ListingParams::new(false, true, false));

        let meta = metadata(EntryKind::Regular, 0o644, 1, 5);
        let Rendered::Line(line) = renderer.render(&entry("a", &meta), &meta, &snapshot) else {
            panic!("expected a long-format line");
        };
        assert!(line.starts_with("-rw-r--r--  1 1000 1000       5 "), "got: {}", line);
        assert!(line.ends_with(" a"));
    }

    #[test]
    fn test_short_format_yields_bare_name() {
        let fs = MemoryFs::new().file("d/x", 1);
        let snapshot = DirectorySnapshot::build(&fs, Path::new("d")).unwrap();
        let meta = metadata(EntryKind::Regular, 0o644, 1, 1);
        let renderer = EntryRenderer::new(&NumericIdentity, &ListingParams::default());

        assert_eq!(
            renderer.render(&entry("x", &meta), &meta, &snapshot),
            Rendered::Token("x".to_string())
        );
    }
}
