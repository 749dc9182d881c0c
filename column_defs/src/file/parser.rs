//! Format-specific parsing utilities for options files.

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Format, Json, Toml},
};

use crate::{ColumnError, ColumnResult};

/// Build a figment for `data` according to the file extension.
///
/// `.json` files use the JSON provider; everything else is read as TOML.
///
/// # Errors
///
/// Returns a [`ColumnError::File`] if the contents fail to parse.
pub(super) fn parse_options_by_format(path: &Utf8Path, data: &str) -> ColumnResult<Figment> {
    let ext = path.extension().map(str::to_ascii_lowercase);
    let figment = if ext.as_deref() == Some("json") {
        serde_json::from_str::<serde_json::Value>(data).map_err(|e| ColumnError::file(path, e))?;
        Figment::from(Json::string(data))
    } else {
        // Validate TOML first so parse failures are reported with the file
        // path before Figment performs its own parse pass.
        toml::from_str::<toml::Value>(data).map_err(|e| ColumnError::file(path, e))?;
        Figment::from(Toml::string(data))
    };
    tracing::debug!(path = %path, format = ext.as_deref().unwrap_or("toml"), "parsed grid options");
    Ok(figment)
}
