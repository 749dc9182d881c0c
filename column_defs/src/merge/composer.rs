//! Ordered accumulation of merge layers.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::{MergeLayer, MergeProvenance, MergeTrace, merge_shallow};

/// Builder that accumulates [`MergeLayer`] instances in application order.
///
/// Later layers win on key collisions.
///
/// ```rust
/// use column_defs::merge::MergeComposer;
/// use serde_json::{json, Map, Value};
///
/// let defaults: Map<String, Value> = serde_json::from_value(json!({"width": 100}))?;
/// let numeric: Map<String, Value> = serde_json::from_value(json!({"width": 50}))?;
/// let column: Map<String, Value> = serde_json::from_value(json!({"field": "age"}))?;
///
/// let mut composer = MergeComposer::new();
/// composer.push_defaults(&defaults);
/// composer.push_column_type("numeric", &numeric);
/// composer.push_definition(&column);
///
/// let merged = composer.merge();
/// assert_eq!(merged.get("width"), Some(&json!(50)));
/// assert_eq!(merged.get("field"), Some(&json!("age")));
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct MergeComposer<'a> {
    layers: Vec<MergeLayer<'a>>,
}

impl<'a> MergeComposer<'a> {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Create a composer with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
        }
    }

    /// Push a defaults layer.
    pub fn push_defaults(&mut self, value: &'a Map<String, Value>) {
        self.push_layer(MergeLayer::defaults(Cow::Borrowed(value)));
    }

    /// Push the layer of the column type `name`.
    pub fn push_column_type(&mut self, name: &str, value: &'a Map<String, Value>) {
        self.push_layer(MergeLayer::column_type(name, Cow::Borrowed(value)));
    }

    /// Push the explicit definition layer.
    pub fn push_definition(&mut self, value: &'a Map<String, Value>) {
        self.push_layer(MergeLayer::definition(Cow::Borrowed(value)));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: MergeLayer<'a>) {
        self.layers.push(layer);
    }

    /// Borrow the accumulated layers.
    #[must_use]
    pub fn layers(&self) -> &[MergeLayer<'a>] {
        &self.layers
    }

    /// Reduce the layers left to right into one property map.
    #[must_use]
    pub fn merge(&self) -> Map<String, Value> {
        let mut merged = Map::new();
        for layer in &self.layers {
            merge_shallow(&mut merged, layer.value());
        }
        merged
    }

    /// Reduce the layers and record which layer supplied each winning key.
    #[must_use]
    pub fn merge_with_trace(&self) -> MergeTrace {
        let mut merged = Map::new();
        let mut sources = BTreeMap::new();
        for layer in &self.layers {
            for key in layer.value().keys() {
                sources.insert(key.clone(), layer.provenance().clone());
            }
            merge_shallow(&mut merged, layer.value());
        }
        MergeTrace::new(merged.into(), sources)
    }

    /// Provenances of the accumulated layers, in order.
    #[must_use]
    pub fn provenances(&self) -> Vec<MergeProvenance> {
        self.layers
            .iter()
            .map(|layer| layer.provenance().clone())
            .collect()
    }
}

impl<'a> IntoIterator for MergeComposer<'a> {
    type Item = MergeLayer<'a>;
    type IntoIter = std::vec::IntoIter<MergeLayer<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}
