//! Error types for listing, layout and command-line handling

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scanning a directory or probing one of its entries.
///
/// Both kinds are recovered where they occur: the traversal reports them and
/// skips the affected directory or entry.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("cannot open directory '{}': {source}", .path.display())]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot access '{}': {source}", .path.display())]
    ProbeFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListingError {
    /// The path the failed operation was attempted on.
    pub fn path(&self) -> &PathBuf {
        match self {
            ListingError::ScanFailed { path, .. } | ListingError::ProbeFailed { path, .. } => path,
        }
    }
}

/// Column layout could not run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Terminal geometry is unavailable, e.g. stdout is redirected.
    #[error("terminal width unavailable")]
    NoTerminal,
}

/// Invalid command-line input. Fatal: nothing is listed.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct UsageError(#[from] pub clap::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_failed_message_names_path() {
        let err = ListingError::ScanFailed {
            path: PathBuf::from("missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "cannot open directory 'missing': No such file or directory"
        );
        assert_eq!(err.path(), &PathBuf::from("missing"));
    }

    #[test]
    fn test_probe_failed_message_names_path() {
        let err = ListingError::ProbeFailed {
            path: PathBuf::from("dir/gone"),
            source: io::Error::new(io::ErrorKind::NotFound, "vanished"),
        };
        assert_eq!(err.to_string(), "cannot access 'dir/gone': vanished");
    }
}
