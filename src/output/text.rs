//! Text sink for listing output and error reports

use std::io::{self, Write};
use std::path::Path;

use crate::error::ListingError;

/// Receives everything the traversal produces.
pub trait ListingOutput {
    /// Print a `<path>:` section header.
    fn header(&mut self, path: &Path) -> io::Result<()>;

    /// Print one finished output line.
    fn line(&mut self, text: &str) -> io::Result<()>;

    /// Report a recovered traversal error.
    fn report(&mut self, error: &ListingError) -> io::Result<()>;
}

/// Writes listing lines to `out` and error reports to `err`.
///
/// A blank line separates each header from whatever was printed before it.
pub struct TextOutput<W: Write, E: Write> {
    out: W,
    err: E,
    wrote_any: bool,
}

impl<W: Write, E: Write> TextOutput<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            out,
            err,
            wrote_any: false,
        }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

impl<W: Write, E: Write> ListingOutput for TextOutput<W, E> {
    fn header(&mut self, path: &Path) -> io::Result<()> {
        if self.wrote_any {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}:", path.display())?;
        self.wrote_any = true;
        Ok(())
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.wrote_any = true;
        Ok(())
    }

    fn report(&mut self, error: &ListingError) -> io::Result<()> {
        writeln!(self.err, "{}: {}", env!("CARGO_PKG_NAME"), error)
    }
}
