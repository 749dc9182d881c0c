//! Runtime loading entrypoints for options and state files.

use camino::Utf8Path;
use figment::providers::Serialized;
use serde::Serialize;

use crate::{ColumnError, ColumnResult, ColumnResultExt, ColumnState, GridColumnOptions};

use super::parser::parse_options_by_format;

/// Values layered over an options file, typically from command-line flags.
///
/// Unset fields leave the file's values untouched.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptionOverrides {
    /// Overrides `immutableColumns`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immutable_columns: Option<bool>,
}

fn read(path: &Utf8Path) -> ColumnResult<String> {
    std::fs::read_to_string(path).map_err(|e| ColumnError::file(path, e))
}

/// Load grid column options from a TOML or JSON file.
///
/// # Examples
///
/// ```rust,no_run
/// use camino::Utf8Path;
/// use column_defs::{build_columns, load_grid_options};
///
/// # fn run() -> column_defs::ColumnResult<()> {
/// let options = load_grid_options(Utf8Path::new("grid.toml"))?;
/// let tree = build_columns(&options);
/// println!("{:?}", tree.ids());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns a [`ColumnError`] if the file cannot be read or parsed, or if
/// its contents do not describe grid options.
pub fn load_grid_options(path: &Utf8Path) -> ColumnResult<GridColumnOptions> {
    load_grid_options_with(path, &GridOptionOverrides::default())
}

/// Load grid column options with `overrides` layered over the file.
///
/// # Errors
///
/// Returns a [`ColumnError`] if the file cannot be read or parsed, or if
/// the merged values do not describe grid options.
pub fn load_grid_options_with(
    path: &Utf8Path,
    overrides: &GridOptionOverrides,
) -> ColumnResult<GridColumnOptions> {
    let data = read(path)?;
    parse_options_by_format(path, &data)?
        .merge(Serialized::defaults(overrides))
        .extract()
        .into_column()
}

/// Parse a column state document (a JSON array of state records).
///
/// # Errors
///
/// Returns a [`ColumnError::Gathering`] if `data` is not a valid state
/// document.
pub fn parse_column_state(data: &str) -> ColumnResult<Vec<ColumnState>> {
    serde_json::from_str(data).into_column()
}

/// Load a column state document from `path`.
///
/// # Errors
///
/// Returns a [`ColumnError::File`] if the file cannot be read or is not a
/// valid state document.
pub fn load_column_state(path: &Utf8Path) -> ColumnResult<Vec<ColumnState>> {
    let data = read(path)?;
    serde_json::from_str(&data).map_err(|e| ColumnError::file(path, e))
}
