//! CLI entry point for lsgrid

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use env_logger::Env;
use log::debug;

use lsgrid::{Lister, ListingParams, TextOutput, UsageError, terminal_columns};

#[derive(Parser, Debug)]
#[command(name = "lsgrid")]
#[command(about = "List directory contents in columns or long format")]
#[command(version)]
struct Args {
    /// Files or directories to list
    paths: Vec<PathBuf>,

    /// Do not ignore entries starting with .
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    long: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,
}

fn parse_args() -> Result<Args, UsageError> {
    Args::try_parse().map_err(UsageError::from)
}

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("LSGRID_LOG", "warn")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(UsageError(e))
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            e.exit()
        }
        Err(e) => {
            eprint!("{}", e);
            process::exit(2);
        }
    };

    let params = ListingParams::new(args.all, args.long, args.recursive);
    let columns = terminal_columns().ok();
    debug!("params {:?}, terminal columns {:?}", params, columns);

    let lister = Lister::new(params).with_columns(columns);
    let mut output = TextOutput::new(io::stdout().lock(), io::stderr().lock());

    let result = lister
        .run(&args.paths, &mut output)
        .and_then(|()| output.flush());

    if let Err(e) = result {
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("lsgrid: error writing output: {}", e);
        }
        process::exit(1);
    }
}
