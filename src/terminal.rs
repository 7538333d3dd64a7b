//! Terminal geometry query

use std::io::IsTerminal;

use terminal_size::{Width, terminal_size};

use crate::error::LayoutError;

/// Column count of the terminal attached to stdout.
///
/// Fails with `LayoutError::NoTerminal` when stdout is not a terminal. A
/// positive `COLUMNS` value overrides the detected width.
pub fn terminal_columns() -> Result<usize, LayoutError> {
    if !std::io::stdout().is_terminal() {
        return Err(LayoutError::NoTerminal);
    }

    let override_width = std::env::var("COLUMNS").ok();
    if let Some(cols) = parse_columns(override_width.as_deref()) {
        return Ok(cols);
    }

    match terminal_size() {
        Some((Width(w), _)) if w > 0 => Ok(w as usize),
        _ => Err(LayoutError::NoTerminal),
    }
}

/// Parse a `COLUMNS`-style override, ignoring empty, zero or malformed values.
fn parse_columns(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_columns() {
        assert_eq!(parse_columns(Some("80")), Some(80));
        assert_eq!(parse_columns(Some(" 132 ")), Some(132));
        assert_eq!(parse_columns(Some("0")), None);
        assert_eq!(parse_columns(Some("wide")), None);
        assert_eq!(parse_columns(None), None);
    }
}
