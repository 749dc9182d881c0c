//! Layer metadata for column definition merges.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Where a merge layer came from.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum MergeProvenance {
    /// `defaultColDef` or `defaultColGroupDef`.
    Defaults,
    /// A registered column type, by name.
    ColumnType(String),
    /// The column or group definition itself.
    Definition,
}

impl fmt::Display for MergeProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => f.write_str("defaults"),
            Self::ColumnType(name) => write!(f, "type:{name}"),
            Self::Definition => f.write_str("definition"),
        }
    }
}

impl Serialize for MergeProvenance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One partial definition taking part in a merge.
#[derive(Clone, Debug)]
pub struct MergeLayer<'a> {
    provenance: MergeProvenance,
    value: Cow<'a, Map<String, Value>>,
}

impl<'a> MergeLayer<'a> {
    /// Construct a defaults layer.
    #[must_use]
    pub const fn defaults(value: Cow<'a, Map<String, Value>>) -> Self {
        Self {
            provenance: MergeProvenance::Defaults,
            value,
        }
    }

    /// Construct a layer for the column type `name`.
    #[must_use]
    pub fn column_type(name: impl Into<String>, value: Cow<'a, Map<String, Value>>) -> Self {
        Self {
            provenance: MergeProvenance::ColumnType(name.into()),
            value,
        }
    }

    /// Construct a layer for the explicit definition.
    #[must_use]
    pub const fn definition(value: Cow<'a, Map<String, Value>>) -> Self {
        Self {
            provenance: MergeProvenance::Definition,
            value,
        }
    }

    /// Returns the provenance of the layer.
    #[must_use]
    pub const fn provenance(&self) -> &MergeProvenance {
        &self.provenance
    }

    /// Borrow the layer's properties.
    #[must_use]
    pub fn value(&self) -> &Map<String, Value> {
        &self.value
    }

    /// Convert this layer into a `'static` owned variant.
    #[must_use]
    pub fn into_owned(self) -> MergeLayer<'static> {
        MergeLayer {
            provenance: self.provenance,
            value: Cow::Owned(self.value.into_owned()),
        }
    }
}
