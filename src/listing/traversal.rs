//! Lister - recursive descent over directories

use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::LayoutError;
use crate::fs::{FileSystem, OsFileSystem};
use crate::identity::{IdentityLookup, SystemIdentity};
use crate::output::{EntryRenderer, ListingOutput, PendingGrid, Rendered, layout};

use super::config::ListingParams;
use super::filter::NameClass;
use super::snapshot::DirectorySnapshot;

/// Lists directories, optionally recursively, to a `ListingOutput`.
///
/// Scan and probe failures are reported to the output and skipped; only
/// write errors from the output itself are returned.
pub struct Lister<F: FileSystem = OsFileSystem, I: IdentityLookup = SystemIdentity> {
    params: ListingParams,
    /// Terminal width for the grid. `None` prints one name per line.
    columns: Option<usize>,
    fs: F,
    identity: I,
}

impl Lister {
    pub fn new(params: ListingParams) -> Self {
        Self {
            params,
            columns: None,
            fs: OsFileSystem,
            identity: SystemIdentity::new(),
        }
    }
}

impl<F: FileSystem, I: IdentityLookup> Lister<F, I> {
    pub fn with_columns(mut self, columns: Option<usize>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_filesystem<G: FileSystem>(self, fs: G) -> Lister<G, I> {
        Lister {
            params: self.params,
            columns: self.columns,
            fs,
            identity: self.identity,
        }
    }

    pub fn with_identity<J: IdentityLookup>(self, identity: J) -> Lister<F, J> {
        Lister {
            params: self.params,
            columns: self.columns,
            fs: self.fs,
            identity,
        }
    }

    pub fn params(&self) -> &ListingParams {
        &self.params
    }

    /// List every operand in order. No operands means the current directory.
    pub fn run<O: ListingOutput>(&self, paths: &[PathBuf], output: &mut O) -> io::Result<()> {
        let current = [PathBuf::from(".")];
        let paths = if paths.is_empty() { &current[..] } else { paths };
        let show_headers = paths.len() > 1 || self.params.recursive;

        for path in paths {
            match self.fs.probe(path) {
                Ok(meta) if !meta.is_dir() => {
                    let snapshot = DirectorySnapshot::single(path, meta);
                    self.render_snapshot(&snapshot, false, output)?;
                }
                _ => self.visit(path, 0, show_headers, output)?,
            }
        }
        Ok(())
    }

    /// List the directory at `path`, then recurse into its subdirectories.
    ///
    /// A directory that cannot be scanned is reported and contributes no
    /// output; its siblings and ancestors carry on.
    pub fn visit<O: ListingOutput>(
        &self,
        path: &Path,
        depth: usize,
        show_header: bool,
        output: &mut O,
    ) -> io::Result<()> {
        debug!("visiting {} at depth {}", path.display(), depth);

        let snapshot = match DirectorySnapshot::build(&self.fs, path) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                output.report(&e)?;
                return Ok(());
            }
        };

        if show_header {
            output.header(path)?;
        }
        let children = self.render_snapshot(&snapshot, true, output)?;
        drop(snapshot);

        for child in &children {
            self.visit(child, depth + 1, true, output)?;
        }
        Ok(())
    }

    /// Render every shown entry of `snapshot` and flush its grid. Returns the
    /// subdirectories to recurse into, in listing order.
    fn render_snapshot<O: ListingOutput>(
        &self,
        snapshot: &DirectorySnapshot,
        filter_names: bool,
        output: &mut O,
    ) -> io::Result<Vec<PathBuf>> {
        let renderer = EntryRenderer::new(&self.identity, &self.params);
        let mut grid = PendingGrid::new();
        let mut children = Vec::new();

        for entry in &snapshot.entries {
            let class = NameClass::of(&entry.name);
            if filter_names && !class.is_shown(&self.params) {
                continue;
            }

            let meta = match &entry.metadata {
                Ok(meta) => meta,
                Err(e) => {
                    output.report(e)?;
                    continue;
                }
            };

            match renderer.render(entry, meta, snapshot) {
                Rendered::Line(line) => output.line(&line)?,
                Rendered::Token(token) => grid.push(token),
            }

            if self.params.recursive && meta.is_dir() && class.may_recurse() {
                children.push(entry.full_path.clone());
            }
        }

        self.flush_grid(&mut grid, output)?;
        Ok(children)
    }

    fn flush_grid<O: ListingOutput>(&self, grid: &mut PendingGrid, output: &mut O) -> io::Result<()> {
        let tokens = grid.take();
        match layout(&tokens, self.columns) {
            Ok(laid_out) => {
                for line in laid_out.lines() {
                    output.line(&line)?;
                }
            }
            Err(LayoutError::NoTerminal) => {
                for token in &tokens {
                    output.line(token)?;
                }
            }
        }
        Ok(())
    }
}
