//! Column and column group definitions as authored by callers.
//!
//! Definitions are kept as open JSON objects: the grid only interprets a
//! handful of well-known keys (`colId`, `field`, `type`, `groupId`, ...) and
//! carries every other property through merging untouched.

use serde::de::Error as _;
use serde::ser::SerializeMap as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Key that turns a definition object into a column group.
pub const CHILDREN_KEY: &str = "children";

/// Reads `value` as a string, treating empty strings as absent.
fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|text| !text.is_empty())
}

/// A user-authored column definition.
///
/// # Examples
///
/// ```
/// use column_defs::ColumnDefinition;
/// use serde_json::json;
///
/// let def: ColumnDefinition =
///     serde_json::from_value(json!({"field": "age", "type": ["numericColumn"]}))?;
/// assert_eq!(def.field(), Some("age"));
/// assert_eq!(def.column_types(), vec!["numericColumn"]);
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ColumnDefinition(Map<String, Value>);

impl ColumnDefinition {
    /// Create an empty definition.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap an existing JSON object.
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Borrow the underlying property map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the definition, returning the property map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Look up a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a property, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the definition has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Explicit column identifier, if present and non-empty.
    #[must_use]
    pub fn col_id(&self) -> Option<&str> {
        non_empty_str(self.0.get("colId"))
    }

    /// Row data field, if present and non-empty.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        non_empty_str(self.0.get("field"))
    }

    /// Column type names in application order.
    ///
    /// `type` may be a single string (comma-separated names are split), or
    /// an array of strings. Blank names and non-string entries are ignored.
    #[must_use]
    pub fn column_types(&self) -> Vec<&str> {
        match self.0.get("type") {
            Some(Value::String(names)) => names
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect(),
            Some(Value::Array(names)) => names
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Reads a string property.
    #[must_use]
    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Reads a boolean property.
    #[must_use]
    pub fn bool_value(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Reads a non-negative integer property.
    #[must_use]
    pub fn u64_value(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }
}

impl From<Map<String, Value>> for ColumnDefinition {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for ColumnDefinition {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A user-authored column group definition, without its children.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ColumnGroupDefinition(Map<String, Value>);

impl ColumnGroupDefinition {
    /// Create an empty group definition.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap an existing JSON object. A `children` key is dropped.
    #[must_use]
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        map.remove(CHILDREN_KEY);
        Self(map)
    }

    /// Borrow the underlying property map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Look up a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the definition has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Explicit group identifier, if present and non-empty.
    #[must_use]
    pub fn group_id(&self) -> Option<&str> {
        non_empty_str(self.0.get("groupId"))
    }

    /// Header text, if any.
    #[must_use]
    pub fn header_name(&self) -> Option<&str> {
        self.0.get("headerName").and_then(Value::as_str)
    }

    /// Whether the group starts expanded.
    #[must_use]
    pub fn open_by_default(&self) -> bool {
        self.0
            .get("openByDefault")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// One entry of a column definition tree.
///
/// A JSON object deserialises as a group exactly when it carries a
/// `children` array; a `children: null` entry is treated as a plain column.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnNode {
    /// A leaf column.
    Column(ColumnDefinition),
    /// A group of columns and nested groups.
    Group {
        /// The group's own properties.
        definition: ColumnGroupDefinition,
        /// Child nodes in definition order.
        children: Vec<Self>,
    },
}

impl ColumnNode {
    /// Number of leaf columns below (and including) this node.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Column(_) => 1,
            Self::Group { children, .. } => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Leaf column definitions below this node, depth first.
    #[must_use]
    pub fn leaves(&self) -> Vec<&ColumnDefinition> {
        let mut leaves = Vec::with_capacity(self.leaf_count());
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a ColumnDefinition>) {
        match self {
            Self::Column(definition) => leaves.push(definition),
            Self::Group { children, .. } => {
                for child in children {
                    child.collect_leaves(leaves);
                }
            }
        }
    }

    fn from_map(mut map: Map<String, Value>) -> Result<Self, String> {
        match map.remove(CHILDREN_KEY) {
            None | Some(Value::Null) => Ok(Self::Column(ColumnDefinition(map))),
            Some(Value::Array(items)) => {
                let children = items
                    .into_iter()
                    .map(serde_json::from_value)
                    .collect::<Result<Vec<Self>, _>>()
                    .map_err(|err| err.to_string())?;
                Ok(Self::Group {
                    definition: ColumnGroupDefinition(map),
                    children,
                })
            }
            Some(other) => Err(format!("`children` must be an array, found {other}")),
        }
    }
}

impl From<ColumnDefinition> for ColumnNode {
    fn from(definition: ColumnDefinition) -> Self {
        Self::Column(definition)
    }
}

impl<'de> Deserialize<'de> for ColumnNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_map(map).map_err(D::Error::custom)
    }
}

impl Serialize for ColumnNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Column(definition) => definition.serialize(serializer),
            Self::Group {
                definition,
                children,
            } => {
                let mut map = serializer.serialize_map(Some(definition.len() + 1))?;
                for (key, value) in definition.as_map() {
                    map.serialize_entry(key, value)?;
                }
                map.serialize_entry(CHILDREN_KEY, children)?;
                map.end()
            }
        }
    }
}
