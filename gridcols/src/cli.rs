//! Command-line interface definitions for `gridcols`.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Parsed CLI arguments for `gridcols`.
#[derive(Debug, Parser)]
#[command(name = "gridcols")]
#[command(about = "Resolve data grid column definitions")]
#[command(version)]
pub struct Args {
    /// Increase log verbosity (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// `gridcols` subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the resolved column ids, one per line.
    Ids {
        /// Grid options file (`.json`, otherwise TOML).
        #[arg(value_name = "path")]
        options: Utf8PathBuf,
    },
    /// Print every column's effective definition.
    Resolve {
        /// Grid options file (`.json`, otherwise TOML).
        #[arg(value_name = "path")]
        options: Utf8PathBuf,
        /// Report the layer that supplied each property.
        #[arg(long = "explain")]
        should_explain: bool,
    },
    /// Print the column and group state of a fresh grid.
    State {
        /// Grid options file (`.json`, otherwise TOML).
        #[arg(value_name = "path")]
        options: Utf8PathBuf,
        /// Saved column state (JSON) to restore before printing.
        #[arg(long, value_name = "path")]
        apply: Option<Utf8PathBuf>,
    },
    /// Replace one set of definitions with another and report the changes.
    Diff {
        /// Options the grid starts with.
        #[arg(value_name = "old")]
        old: Utf8PathBuf,
        /// Options replacing them.
        #[arg(value_name = "new")]
        new: Utf8PathBuf,
        /// Take every state value from the new definitions.
        #[arg(long = "immutable")]
        is_immutable: bool,
    },
}
