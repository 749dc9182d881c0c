//! Merge results annotated with the layer each property came from.

use std::collections::BTreeMap;

use serde::Serialize;

use super::MergeProvenance;
use crate::ColumnDefinition;

/// An effective definition together with the winning layer of every key.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergeTrace {
    effective: ColumnDefinition,
    sources: BTreeMap<String, MergeProvenance>,
}

impl MergeTrace {
    pub(crate) const fn new(
        effective: ColumnDefinition,
        sources: BTreeMap<String, MergeProvenance>,
    ) -> Self {
        Self { effective, sources }
    }

    /// The merged definition.
    #[must_use]
    pub const fn effective(&self) -> &ColumnDefinition {
        &self.effective
    }

    /// The layer that supplied `key`, if the key is present.
    #[must_use]
    pub fn source_of(&self, key: &str) -> Option<&MergeProvenance> {
        self.sources.get(key)
    }

    /// Consume the trace, returning the merged definition.
    #[must_use]
    pub fn into_effective(self) -> ColumnDefinition {
        self.effective
    }
}
