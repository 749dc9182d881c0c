//! Extensions for mapping errors to `ColumnResult` concisely.
//!
//! These helpers replace repetitive `.map_err(|e| Arc::new(e.into()))`
//! chains when converting external error types into the crate's
//! `ColumnResult<T>` alias (`Result<T, Arc<ColumnError>>`).
//!
//! # Examples
//!
//! ```
//! use column_defs::{ColumnResult, ColumnResultExt};
//!
//! fn serialise() -> ColumnResult<serde_json::Value> {
//!     serde_json::to_value(&42).into_column()
//! }
//! ```

use std::sync::Arc;

use crate::ColumnError;

/// Shared result type used by the loading APIs.
pub type ColumnResult<T> = Result<T, Arc<ColumnError>>;

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<ColumnError>` into a `ColumnResult<T>`.
pub trait ColumnResultExt<T> {
    /// Convert `Result<T, E>` into `ColumnResult<T>` using `Into<ColumnError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<ColumnError>`.
    fn into_column(self) -> ColumnResult<T>;
}

impl<T, E> ColumnResultExt<T> for Result<T, E>
where
    E: Into<ColumnError>,
{
    fn into_column(self) -> ColumnResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
