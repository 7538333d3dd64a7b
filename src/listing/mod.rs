//! Directory listing
//!
//! `Lister` drives a depth-first, pre-order traversal: each directory is
//! scanned into a `DirectorySnapshot`, rendered in full, and only then are its
//! subdirectories visited in listing order.

mod config;
mod filter;
mod snapshot;
mod traversal;

pub use config::ListingParams;
pub use filter::NameClass;
pub use snapshot::{DirectoryEntry, DirectorySnapshot, decimal_width};
pub use traversal::Lister;
