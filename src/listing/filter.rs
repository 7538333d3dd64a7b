//! Dotfile visibility rules

use super::config::ListingParams;

/// How an entry name is treated by the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameClass {
    /// `.` or `..`: shown only with `show_all`, never recursed into.
    SelfOrParent,
    /// Any other name starting with `.`: shown only with `show_all`.
    Hidden,
    Visible,
}

impl NameClass {
    pub fn of(name: &str) -> Self {
        match name {
            "." | ".." => NameClass::SelfOrParent,
            n if n.starts_with('.') => NameClass::Hidden,
            _ => NameClass::Visible,
        }
    }

    pub fn is_shown(self, params: &ListingParams) -> bool {
        match self {
            NameClass::Visible => true,
            NameClass::SelfOrParent | NameClass::Hidden => params.show_all,
        }
    }

    pub fn may_recurse(self) -> bool {
        self != NameClass::SelfOrParent
    }
}
