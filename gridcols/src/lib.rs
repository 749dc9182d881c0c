//! Library interface for the `gridcols` command-line tool.
//!
//! Each subcommand loads grid options through `column_defs`, runs one
//! operation and writes a JSON report. The binary is a thin wrapper around
//! [`run`] so the commands can be exercised without spawning a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

use std::io::Write;

use crate::cli::Command;
use crate::error::GridcolsError;

/// Execute `command`, writing its report to `out`.
///
/// # Errors
///
/// Returns an error when an input file cannot be loaded or the report
/// cannot be written.
pub fn run(command: &Command, out: &mut impl Write) -> Result<(), GridcolsError> {
    match command {
        Command::Ids { options } => {
            let ids = commands::ids(options)?;
            output::write_lines(out, &ids)
        }
        Command::Resolve {
            options,
            should_explain,
        } => output::write_json(out, &commands::resolve(options, *should_explain)?),
        Command::State { options, apply } => {
            output::write_json(out, &commands::state(options, apply.as_deref())?)
        }
        Command::Diff {
            old,
            new,
            is_immutable,
        } => output::write_json(out, &commands::diff(old, new, *is_immutable)?),
    }
}
