//! Configuration for one listing invocation

/// Flags controlling what is listed and how.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingParams {
    /// Include entries whose name begins with `.`, including `.` and `..`.
    pub show_all: bool,
    /// One line per entry with permissions, owner, size and time.
    pub long_format: bool,
    /// Descend into subdirectories after listing each directory.
    pub recursive: bool,
    /// Kept equal to `show_all`; dotfile visibility is decided by `show_all` alone.
    pub show_dot: bool,
}

impl ListingParams {
    pub fn new(show_all: bool, long_format: bool, recursive: bool) -> Self {
        Self {
            show_all,
            long_format,
            recursive,
            show_dot: show_all,
        }
    }
}
