//! Layered column definition merging.
//!
//! A column's effective definition is built from three layers, applied in
//! order with later layers winning on key collisions:
//!
//! 1. the grid's default column definition;
//! 2. every column type named by the definition's `type`, in listed order;
//! 3. the column definition itself.
//!
//! The merge is shallow: a colliding key is replaced wholesale, nested
//! objects included. Inputs are borrowed and never mutated.
//!
//! # Example
//!
//! ```rust
//! use column_defs::{ColumnDefinition, ColumnTypeRegistry, merge_column_definition};
//! use serde_json::json;
//!
//! let defaults: ColumnDefinition = serde_json::from_value(json!({"width": 100}))?;
//! let mut types = ColumnTypeRegistry::new();
//! types.insert("t", serde_json::from_value(json!({"width": 50}))?);
//!
//! let typed: ColumnDefinition = serde_json::from_value(json!({"type": "t"}))?;
//! let explicit: ColumnDefinition = serde_json::from_value(json!({"type": "t", "width": 20}))?;
//!
//! assert_eq!(merge_column_definition(&defaults, &types, &typed).get("width"), Some(&json!(50)));
//! assert_eq!(merge_column_definition(&defaults, &types, &explicit).get("width"), Some(&json!(20)));
//! # Ok::<_, serde_json::Error>(())
//! ```

mod composer;
mod layer;
mod trace;

use serde_json::{Map, Value};

pub use composer::MergeComposer;
pub use layer::{MergeLayer, MergeProvenance};
pub use trace::MergeTrace;

use crate::{ColumnDefinition, ColumnGroupDefinition, ColumnTypeRegistry};

/// Overlay every key of `layer` onto `target`.
///
/// Unlike a deep merge, nested objects and arrays in `layer` replace the
/// existing value instead of being combined with it.
pub fn merge_shallow(target: &mut Map<String, Value>, layer: &Map<String, Value>) {
    for (key, value) in layer {
        target.insert(key.clone(), value.clone());
    }
}

/// Collect the merge layers for one column without applying them.
///
/// Type names missing from `types` are skipped with a warning.
#[must_use]
pub fn compose_column_layers<'a>(
    default: &'a ColumnDefinition,
    types: &'a ColumnTypeRegistry,
    column: &'a ColumnDefinition,
) -> MergeComposer<'a> {
    let names = column.column_types();
    let mut composer = MergeComposer::with_capacity(names.len() + 2);
    composer.push_defaults(default.as_map());
    for name in names {
        match types.get(name) {
            Some(partial) => composer.push_column_type(name, partial.as_map()),
            None => tracing::warn!(
                column_type = name,
                "column type is not registered; skipping it"
            ),
        }
    }
    composer.push_definition(column.as_map());
    composer
}

/// Compute the effective definition of `column`.
#[must_use]
pub fn merge_column_definition(
    default: &ColumnDefinition,
    types: &ColumnTypeRegistry,
    column: &ColumnDefinition,
) -> ColumnDefinition {
    compose_column_layers(default, types, column).merge().into()
}

/// Compute the effective definition of `column` and the layer behind each
/// property.
#[must_use]
pub fn explain_column_definition(
    default: &ColumnDefinition,
    types: &ColumnTypeRegistry,
    column: &ColumnDefinition,
) -> MergeTrace {
    compose_column_layers(default, types, column).merge_with_trace()
}

/// Compute the effective definition of a column group.
///
/// Groups only take the group defaults; column types never apply to them.
#[must_use]
pub fn merge_group_definition(
    default: &ColumnGroupDefinition,
    group: &ColumnGroupDefinition,
) -> ColumnGroupDefinition {
    let mut composer = MergeComposer::with_capacity(2);
    composer.push_defaults(default.as_map());
    composer.push_definition(group.as_map());
    ColumnGroupDefinition::from_map(composer.merge())
}
