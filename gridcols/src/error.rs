//! Error types for `gridcols`.

use std::sync::Arc;

use column_defs::ColumnError;
use thiserror::Error;

/// Errors surfaced by `gridcols` commands.
#[derive(Debug, Error)]
pub enum GridcolsError {
    /// Loading grid options or column state failed.
    #[error(transparent)]
    Column(#[from] Arc<ColumnError>),

    /// A report could not be serialised.
    #[error("failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
