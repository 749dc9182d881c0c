//! Error types produced while loading grid column options.
//!
//! Resolution, merging, state and change reconciliation are total; only the
//! loading edge (files, figment extraction, state documents) can fail.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::ColumnError;
