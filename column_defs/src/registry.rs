//! Named column types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ColumnDefinition;

/// Header class applied by the provided right-aligned types.
pub const RIGHT_ALIGNED_HEADER_CLASS: &str = "ag-right-aligned-header";
/// Cell class applied by the provided right-aligned types.
pub const RIGHT_ALIGNED_CELL_CLASS: &str = "ag-right-aligned-cell";

/// Names of the column types every grid provides.
pub const PROVIDED_COLUMN_TYPES: [&str; 2] = ["rightAligned", "numericColumn"];

/// Registry of column types, keyed by name.
///
/// Column types apply to columns only, never to groups.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ColumnTypeRegistry(BTreeMap<String, ColumnDefinition>);

impl ColumnTypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Create a registry holding the provided `rightAligned` and
    /// `numericColumn` types.
    #[must_use]
    pub fn with_provided() -> Self {
        let mut registry = Self::new();
        for name in PROVIDED_COLUMN_TYPES {
            registry.insert(name, right_aligned());
        }
        registry
    }

    /// Register `definition` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, definition: ColumnDefinition) {
        self.0.insert(name.into(), definition);
    }

    /// Register every entry of `types`; entries replace same-named ones.
    pub fn extend_from<'a, I>(&mut self, types: I)
    where
        I: IntoIterator<Item = (&'a String, &'a ColumnDefinition)>,
    {
        for (name, definition) in types {
            self.insert(name.clone(), definition.clone());
        }
    }

    /// Look up a type by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ColumnDefinition> {
        self.0.get(name)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

fn right_aligned() -> ColumnDefinition {
    let mut map = Map::new();
    map.insert(
        "headerClass".to_owned(),
        Value::from(RIGHT_ALIGNED_HEADER_CLASS),
    );
    map.insert("cellClass".to_owned(), Value::from(RIGHT_ALIGNED_CELL_CLASS));
    ColumnDefinition::from_map(map)
}
