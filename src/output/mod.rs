//! Listing output
//!
//! - `long` - per-entry rendering (long-format lines, short-format tokens)
//! - `grid` - multi-column layout of short-format names
//! - `text` - output sink writing lines and error reports

mod grid;
mod long;
mod text;

pub use grid::{Grid, PendingGrid, layout};
pub use long::{EntryRenderer, Rendered, format_timestamp, mode_string};
pub use text::{ListingOutput, TextOutput};
