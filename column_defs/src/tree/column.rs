//! Resolved columns and groups.

use serde_json::Value;

use crate::state::{ColumnState, SortDirection, clamp_width, initial_state};
use crate::{ColumnDefinition, ColumnGroupDefinition};

use super::ColumnRef;

/// A resolved leaf column.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    id: String,
    definition: ColumnDefinition,
    pub(crate) state: ColumnState,
    pub(crate) sort: Option<SortDirection>,
    pub(crate) pivot_index: Option<usize>,
    filter_model: Option<Value>,
    parent: Option<String>,
}

impl Column {
    pub(crate) fn new(id: String, definition: ColumnDefinition, parent: Option<String>) -> Self {
        let initial = initial_state(&id, &definition);
        Self {
            id,
            definition,
            state: initial.state,
            sort: initial.sort,
            pivot_index: initial.pivot_index,
            filter_model: None,
            parent,
        }
    }

    /// The resolved column id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The effective (merged) definition.
    #[must_use]
    pub const fn definition(&self) -> &ColumnDefinition {
        &self.definition
    }

    /// Current column state.
    #[must_use]
    pub const fn state(&self) -> &ColumnState {
        &self.state
    }

    /// Current sort direction.
    #[must_use]
    pub const fn sort(&self) -> Option<SortDirection> {
        self.sort
    }

    /// Current pivot position.
    #[must_use]
    pub const fn pivot_index(&self) -> Option<usize> {
        self.pivot_index
    }

    /// Active filter model, opaque to this crate.
    #[must_use]
    pub const fn filter_model(&self) -> Option<&Value> {
        self.filter_model.as_ref()
    }

    /// Id of the enclosing group, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Whether the column is currently visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !self.state.hide
    }

    /// Set the sort direction.
    pub const fn set_sort(&mut self, sort: Option<SortDirection>) {
        self.sort = sort;
    }

    /// Set or clear the filter model.
    pub fn set_filter_model(&mut self, model: Option<Value>) {
        self.filter_model = model;
    }

    /// Set the width, clamped to the definition's `minWidth`/`maxWidth`.
    pub fn set_width(&mut self, width: u32) {
        self.state.width = clamp_width(u64::from(width), &self.definition);
    }

    /// Recompute the state from the effective definition.
    pub(crate) fn reset(&mut self) {
        let initial = initial_state(&self.id, &self.definition);
        self.state = initial.state;
        self.sort = initial.sort;
        self.pivot_index = initial.pivot_index;
    }

    /// Take `state` for this column; the id is kept and the width clamped.
    pub(crate) fn apply_state(&mut self, state: &ColumnState) {
        self.state = ColumnState {
            col_id: self.id.clone(),
            width: clamp_width(u64::from(state.width), &self.definition),
            ..state.clone()
        };
    }

    /// Carry user-held values over from the same column before a
    /// definition change.
    pub(crate) fn carry_over(&mut self, previous: &Self, immutable_columns: bool) {
        self.sort = previous.sort;
        self.filter_model.clone_from(&previous.filter_model);
        if immutable_columns {
            return;
        }
        self.state.agg_func.clone_from(&previous.state.agg_func);
        self.state.width = previous.state.width;
        self.state.row_group_index = previous.state.row_group_index;
        self.state.pinned = previous.state.pinned;
        self.pivot_index = previous.pivot_index;
    }
}

/// A resolved column group.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnGroup {
    id: String,
    definition: ColumnGroupDefinition,
    pub(crate) open: bool,
    parent: Option<String>,
    pub(crate) children: Vec<ColumnRef>,
}

impl ColumnGroup {
    pub(crate) fn new(id: String, definition: ColumnGroupDefinition, parent: Option<String>) -> Self {
        let open = definition.open_by_default();
        Self {
            id,
            definition,
            open,
            parent,
            children: Vec::new(),
        }
    }

    /// The resolved group id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The effective (merged) group definition.
    #[must_use]
    pub const fn definition(&self) -> &ColumnGroupDefinition {
        &self.definition
    }

    /// Whether the group is expanded.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Id of the enclosing group, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Children in definition order.
    #[must_use]
    pub fn children(&self) -> &[ColumnRef] {
        &self.children
    }
}
