//! Constructors and aggregation helpers for `ColumnError`.

use std::error::Error;
use std::sync::Arc;

use camino::Utf8Path;
use figment::Error as FigmentError;

use super::{AggregatedErrors, ColumnError};

impl ColumnError {
    /// Tries to build a [`ColumnError`] from an iterator of errors.
    ///
    /// Returns `None` when no errors are supplied, the inner error when a
    /// single uniquely owned error is supplied, and [`Self::Aggregate`]
    /// otherwise.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.len() > 1 {
            return Some(Self::Aggregate(Box::new(AggregatedErrors::new(arcs))));
        }
        let last = arcs.pop()?;
        Some(match Arc::try_unwrap(last) {
            Ok(err) => err,
            Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
        })
    }

    /// Construct a gathering error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use column_defs::ColumnError;
    /// let e = ColumnError::gathering(figment::Error::from("boom"));
    /// assert!(matches!(e, ColumnError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }

    /// Construct a file error for `path`, wrapped in an [`Arc`].
    #[must_use]
    pub fn file(path: &Utf8Path, source: impl Into<Box<dyn Error + Send + Sync>>) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        })
    }
}
