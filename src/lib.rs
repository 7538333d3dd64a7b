//! lsgrid - directory listing in terminal-width columns or long format

pub mod error;
pub mod fs;
pub mod identity;
pub mod listing;
pub mod output;
pub mod terminal;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{LayoutError, ListingError, UsageError};
pub use fs::{EntryKind, EntryMetadata, FileSystem, OsFileSystem};
pub use identity::{IdentityLookup, NumericIdentity, SystemIdentity};
pub use listing::{DirectoryEntry, DirectorySnapshot, Lister, ListingParams};
pub use output::{EntryRenderer, Grid, ListingOutput, PendingGrid, Rendered, TextOutput, layout};
pub use terminal::terminal_columns;
