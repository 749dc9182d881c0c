//! Column identifier resolution.
//!
//! Every column receives an identifier that is unique within its grid. The
//! candidate is the explicit `colId`, then the `field`, then the column's
//! zero-based position; a candidate that is already taken gets the first
//! free `_n` suffix.

use std::collections::HashSet;
use std::hash::BuildHasher;

use crate::{ColumnDefinition, ColumnGroupDefinition};

/// Returns `candidate`, or `candidate_n` for the smallest `n >= 1` not in
/// `assigned`.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use column_defs::unique_id;
///
/// let assigned: HashSet<String> = ["age".to_owned(), "age_1".to_owned()].into();
/// assert_eq!(unique_id("name", &assigned), "name");
/// assert_eq!(unique_id("age", &assigned), "age_2");
/// ```
#[must_use]
pub fn unique_id<S: BuildHasher>(candidate: &str, assigned: &HashSet<String, S>) -> String {
    if !assigned.contains(candidate) {
        return candidate.to_owned();
    }
    let mut suffix: usize = 1;
    loop {
        let id = format!("{candidate}_{suffix}");
        if !assigned.contains(&id) {
            return id;
        }
        suffix += 1;
    }
}

/// Resolution pass state: the identifiers handed out so far.
///
/// A resolver is local to one pass; build a fresh one for every
/// (re)configuration. Column and group identifiers live in separate
/// namespaces, so the tree builder keeps one resolver for each.
#[derive(Clone, Debug, Default)]
pub struct ColumnIdResolver {
    assigned: HashSet<String>,
}

impl ColumnIdResolver {
    /// Create a resolver with nothing assigned.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `candidate` unique against this pass and record the result.
    pub fn claim(&mut self, candidate: &str) -> String {
        let id = unique_id(candidate, &self.assigned);
        if id != candidate {
            tracing::debug!(candidate, id = %id, "identifier collided; suffix appended");
        }
        self.assigned.insert(id.clone());
        id
    }

    /// Resolve the identifier of the column at `position`.
    pub fn resolve(&mut self, definition: &ColumnDefinition, position: usize) -> String {
        match definition.col_id().or_else(|| definition.field()) {
            Some(candidate) => self.claim(candidate),
            None => self.claim(&position.to_string()),
        }
    }

    /// Resolve the identifier of the group at `position`.
    pub fn resolve_group(&mut self, definition: &ColumnGroupDefinition, position: usize) -> String {
        match definition.group_id() {
            Some(candidate) => self.claim(candidate),
            None => self.claim(&position.to_string()),
        }
    }

    /// Whether `id` has been handed out in this pass.
    #[must_use]
    pub fn is_assigned(&self, id: &str) -> bool {
        self.assigned.contains(id)
    }
}

/// Resolve one identifier per definition, aligned by position.
///
/// # Examples
///
/// ```
/// use column_defs::{ColumnDefinition, resolve_column_ids};
/// use serde_json::json;
///
/// let defs: Vec<ColumnDefinition> = serde_json::from_value(json!([
///     {"colId": "c1"}, {"colId": "c1"}, {"field": "age"}, {"field": "age"}, {}, {}
/// ]))?;
/// assert_eq!(
///     resolve_column_ids(&defs),
///     vec!["c1", "c1_1", "age", "age_1", "4", "5"]
/// );
/// # Ok::<_, serde_json::Error>(())
/// ```
#[must_use]
pub fn resolve_column_ids(definitions: &[ColumnDefinition]) -> Vec<String> {
    let mut resolver = ColumnIdResolver::new();
    definitions
        .iter()
        .enumerate()
        .map(|(position, definition)| resolver.resolve(definition, position))
        .collect()
}

#[cfg(test)]
mod tests;
