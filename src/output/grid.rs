//! Multi-column layout of short-format names
//!
//! Names are filled column-major (top to bottom, then left to right). The
//! row count is found by searching upward from a lower bound derived from the
//! total text length, accepting the first count whose summed column widths
//! stay strictly below the terminal width.

use log::debug;
use unicode_width::UnicodeWidthStr;

use crate::error::LayoutError;

/// Spaces between adjacent columns.
const SEPARATOR: usize = 2;

/// Names collected for one directory, awaiting layout.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PendingGrid {
    tokens: Vec<String>,
}

impl PendingGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: String) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Take the collected names, leaving the grid empty for the next directory.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.tokens)
    }
}

/// A computed layout: `rows` rows, column `c` holding tokens
/// `[c * rows, (c + 1) * rows)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tokens: Vec<String>,
    rows: usize,
    /// Display width of the widest token in each column.
    column_widths: Vec<usize>,
}

impl Grid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.column_widths.len()
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Output lines, without trailing padding.
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                let mut line = String::new();
                let cells: Vec<(usize, &String)> = self
                    .tokens
                    .iter()
                    .enumerate()
                    .skip(row)
                    .step_by(self.rows)
                    .collect();
                let last = cells.len().saturating_sub(1);
                for (i, (index, token)) in cells.into_iter().enumerate() {
                    line.push_str(token);
                    if i < last {
                        let width = self.column_widths[index / self.rows];
                        let pad = width.saturating_sub(token.width()) + SEPARATOR;
                        line.extend(std::iter::repeat_n(' ', pad));
                    }
                }
                line
            })
            .collect()
    }
}

/// Lay out `tokens` for a terminal `terminal_columns` wide.
///
/// Fails with `LayoutError::NoTerminal` when the width is unknown or zero;
/// callers print one name per line instead.
pub fn layout(tokens: &[String], terminal_columns: Option<usize>) -> Result<Grid, LayoutError> {
    let cols = match terminal_columns {
        Some(c) if c > 0 => c,
        _ => return Err(LayoutError::NoTerminal),
    };

    if tokens.is_empty() {
        return Ok(Grid {
            tokens: Vec::new(),
            rows: 0,
            column_widths: Vec::new(),
        });
    }

    let widths: Vec<usize> = tokens.iter().map(|t| t.width()).collect();
    let count = widths.len();
    let total_length: usize = widths.iter().map(|w| w + SEPARATOR).sum();
    let longest = widths.iter().copied().max().unwrap_or(0);

    let min_rows = total_length / cols + 1;
    let max_rows = (longest + SEPARATOR) * count / cols + 1;
    debug!(
        "layout: {} tokens, total {}, longest {}, rows {}..={}",
        count, total_length, longest, min_rows, max_rows
    );

    // Past `count` rows every layout is a single column, so widening stops there.
    let upper = max_rows.max(count);
    let best = (min_rows..=upper).find_map(|rows| {
        let column_widths = column_widths(&widths, rows);
        let used: usize = column_widths.iter().map(|w| w + SEPARATOR).sum();
        (used < cols).then_some((rows, column_widths))
    });

    let (rows, column_widths) = match best {
        Some(found) => found,
        None => {
            debug!("layout: nothing fits in {} columns, one name per line", cols);
            (count, column_widths(&widths, count))
        }
    };
    debug!("layout: chose {} rows, {} columns", rows, column_widths.len());

    Ok(Grid {
        tokens: tokens.to_vec(),
        rows,
        column_widths,
    })
}

/// Widest entry of each column when filling `rows` rows column-major.
fn column_widths(widths: &[usize], rows: usize) -> Vec<usize> {
    widths
        .chunks(rows)
        .map(|column| column.iter().copied().max().unwrap_or(0))
        .collect()
}
