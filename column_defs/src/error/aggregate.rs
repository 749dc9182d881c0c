//! Aggregation container for multiple `ColumnError` values.

use std::{error::Error, fmt, sync::Arc};

use super::ColumnError;

/// Collection of [`ColumnError`]s produced by a single command.
///
/// # Examples
///
/// ```
/// use column_defs::ColumnError;
/// let e = ColumnError::try_aggregate(vec![
///     ColumnError::gathering(figment::Error::from("first")),
///     ColumnError::gathering(figment::Error::from("second")),
/// ]);
/// if let Some(ColumnError::Aggregate(agg)) = e {
///     assert_eq!(agg.len(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<Arc<ColumnError>>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<Arc<ColumnError>>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &ColumnError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl IntoIterator for AggregatedErrors {
    type Item = Arc<ColumnError>;
    type IntoIter = std::vec::IntoIter<Arc<ColumnError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
