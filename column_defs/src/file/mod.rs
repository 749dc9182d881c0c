//! Loading grid column options and state from files.

mod loader;
mod parser;

pub use loader::{GridOptionOverrides, load_column_state, load_grid_options, load_grid_options_with, parse_column_state};

#[cfg(test)]
mod tests;
