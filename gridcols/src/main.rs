//! CLI entrypoint for `gridcols`.

use std::io::{self, Write};

use clap::Parser;
use gridcols::cli::Args;
use gridcols::error::GridcolsError;
use gridcols::logging::LogConfig;
use gridcols::{logging, run};

fn main() -> Result<(), GridcolsError> {
    let args = Args::parse();
    logging::init_logging(&LogConfig::from_verbosity(args.verbose))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args.command, &mut out)?;
    out.flush()?;
    Ok(())
}
