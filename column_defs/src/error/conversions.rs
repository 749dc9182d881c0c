//! Trait-based conversions between external error types and `ColumnError`.

use figment::Error as FigmentError;

use super::ColumnError;

/// JSON decoding failures (state documents) surface as gathering errors.
impl From<serde_json::Error> for ColumnError {
    fn from(e: serde_json::Error) -> Self {
        Self::Gathering(Box::new(FigmentError::from(format!(
            "JSON error: {} at line {}, column {}",
            e,
            e.line(),
            e.column()
        ))))
    }
}

impl From<FigmentError> for ColumnError {
    fn from(e: FigmentError) -> Self {
        Self::Gathering(e.into())
    }
}
