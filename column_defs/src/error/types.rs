//! Primary error enum for grid option loading.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors that can occur while loading grid column options or state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ColumnError {
    /// Error originating from an options or state file.
    #[error("Grid options file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying error reported while reading or parsing the file.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error while extracting options from the configured providers.
    #[error("Failed to gather grid options: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// Multiple errors occurred while loading.
    #[error("multiple grid option errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
