//! Sorted, fully probed view of one directory

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::ListingError;
use crate::fs::{EntryMetadata, FileSystem};

/// One object discovered in a directory scan.
#[derive(Debug)]
pub struct DirectoryEntry {
    /// Raw entry name, leading dot included.
    pub name: String,
    /// Parent path joined with the entry name.
    pub full_path: PathBuf,
    /// Probe outcome. A failed probe keeps the entry in the list so it can be
    /// reported when it is rendered.
    pub metadata: Result<EntryMetadata, ListingError>,
}

/// Entries of one directory in byte-wise name order, with the alignment
/// widths of the long format computed over all of them.
#[derive(Debug)]
pub struct DirectorySnapshot {
    pub path: PathBuf,
    pub entries: Vec<DirectoryEntry>,
    /// Decimal width of the largest link count among probed entries.
    pub max_link_count_width: usize,
    /// Decimal width of the largest size among probed entries.
    pub max_size_width: usize,
}

impl DirectorySnapshot {
    /// Enumerate, sort and probe every entry of `path`.
    pub fn build<F: FileSystem>(fs: &F, path: &Path) -> Result<Self, ListingError> {
        let mut names = fs
            .list_entries(path)
            .map_err(|source| ListingError::ScanFailed {
                path: path.to_path_buf(),
                source,
            })?;
        names.sort();

        let entries = names
            .into_iter()
            .map(|name| {
                let full_path = path.join(&name);
                let metadata = probe_entry(fs, &full_path);
                DirectoryEntry {
                    name: name.to_string_lossy().into_owned(),
                    full_path,
                    metadata,
                }
            })
            .collect();

        Ok(Self::from_entries(path.to_path_buf(), entries))
    }

    /// Snapshot holding a single non-directory operand, displayed under the
    /// name it was given on the command line.
    pub fn single(path: &Path, metadata: EntryMetadata) -> Self {
        let entry = DirectoryEntry {
            name: path.to_string_lossy().into_owned(),
            full_path: path.to_path_buf(),
            metadata: Ok(metadata),
        };
        let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::from_entries(parent, vec![entry])
    }

    fn from_entries(path: PathBuf, entries: Vec<DirectoryEntry>) -> Self {
        let probed = entries.iter().filter_map(|e| e.metadata.as_ref().ok());
        let (max_links, max_size) = probed.fold((0u64, 0u64), |(links, size), meta| {
            (links.max(meta.link_count), size.max(meta.size))
        });

        Self {
            path,
            entries,
            max_link_count_width: decimal_width(max_links),
            max_size_width: decimal_width(max_size),
        }
    }
}

fn probe_entry<F: FileSystem>(fs: &F, path: &Path) -> Result<EntryMetadata, ListingError> {
    fs.probe(path).map_err(|source| {
        debug!("probe failed for {}: {}", path.display(), source);
        ListingError::ProbeFailed {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Number of decimal digits needed to print `n`.
pub fn decimal_width(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}
