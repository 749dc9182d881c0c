//! Grid-level column configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ColumnDefinition, ColumnGroupDefinition, ColumnNode, ColumnTypeRegistry};

/// The column-related options of one grid.
///
/// Keys use the grid's camelCase names, so options files read
/// `columnDefs`, `defaultColDef`, `defaultColGroupDef`, `columnTypes` and
/// `immutableColumns`. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridColumnOptions {
    /// Column and group definitions in display order.
    pub column_defs: Vec<ColumnNode>,
    /// Properties every column inherits.
    pub default_col_def: ColumnDefinition,
    /// Properties every column group inherits.
    pub default_col_group_def: ColumnGroupDefinition,
    /// User-registered column types.
    pub column_types: BTreeMap<String, ColumnDefinition>,
    /// Take order, widths, pinning, aggregation, grouping and pivoting from
    /// new definitions instead of keeping the user's changes.
    pub immutable_columns: bool,
}

impl GridColumnOptions {
    /// Options holding `column_defs` and nothing else.
    #[must_use]
    pub fn with_columns(column_defs: Vec<ColumnNode>) -> Self {
        Self {
            column_defs,
            ..Self::default()
        }
    }

    /// The provided column types overlaid with the user's `columnTypes`.
    #[must_use]
    pub fn type_registry(&self) -> ColumnTypeRegistry {
        let mut registry = ColumnTypeRegistry::with_provided();
        registry.extend_from(&self.column_types);
        registry
    }
}
