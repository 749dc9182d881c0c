//! Column state: save, restore and reset.
//!
//! State is the part of a column the user changes while using the grid.
//! It round-trips through JSON as an array of records:
//!
//! ```json
//! [
//!   { "colId": "athlete", "aggFunc": "sum", "hide": false, "rowGroupIndex": 0, "width": 150, "pinned": null },
//!   { "colId": "age", "aggFunc": null, "hide": true, "rowGroupIndex": null, "width": 90, "pinned": "left" }
//! ]
//! ```

mod derive;

use serde::{Deserialize, Serialize};

use crate::ColumnTree;

pub use derive::{DEFAULT_MIN_WIDTH, DEFAULT_WIDTH};
pub(crate) use derive::{
    assign_flagged_indices, clamp_width, initial_state, renumber_flagged_indices,
};

/// Side a column is pinned to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pinned {
    /// Pinned to the left edge.
    Left,
    /// Pinned to the right edge.
    Right,
}

/// Sort direction of a column.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Saved state of one column.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnState {
    /// Id of the column the record belongs to.
    pub col_id: String,
    /// Aggregation function when the column is a value column.
    pub agg_func: Option<String>,
    /// Whether the column is hidden.
    #[serde(default)]
    pub hide: bool,
    /// Position among the row group columns, if grouped.
    pub row_group_index: Option<usize>,
    /// Column width in pixels.
    pub width: u32,
    /// Pinned side, if pinned.
    pub pinned: Option<Pinned>,
}

/// Saved state of one column group.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnGroupState {
    /// Id of the group the record belongs to.
    pub group_id: String,
    /// Whether the group is expanded.
    pub open: bool,
}

/// Outcome of applying state records.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StateApplication {
    /// Ids whose record was applied, in record order.
    pub applied: Vec<String>,
    /// Ids in the records that matched nothing (or repeated an id).
    pub unmatched: Vec<String>,
}

impl ColumnTree {
    /// State of every column, in display order.
    #[must_use]
    pub fn column_state(&self) -> Vec<ColumnState> {
        self.columns.iter().map(|column| column.state().clone()).collect()
    }

    /// Restore saved column state.
    ///
    /// Columns named in `states` take the saved values and are placed first,
    /// in record order. Columns not named are hidden and follow, keeping
    /// their relative order. Widths are clamped to each column's limits.
    pub fn apply_column_state(&mut self, states: &[ColumnState]) -> StateApplication {
        let mut remaining = std::mem::take(&mut self.columns);
        let mut ordered = Vec::with_capacity(remaining.len());
        let mut outcome = StateApplication::default();
        for state in states {
            match remaining.iter().position(|column| column.id() == state.col_id) {
                Some(index) => {
                    let mut column = remaining.remove(index);
                    column.apply_state(state);
                    ordered.push(column);
                    outcome.applied.push(state.col_id.clone());
                }
                None => outcome.unmatched.push(state.col_id.clone()),
            }
        }
        for mut column in remaining {
            column.state.hide = true;
            ordered.push(column);
        }
        self.columns = ordered;
        if !outcome.unmatched.is_empty() {
            tracing::warn!(unmatched = ?outcome.unmatched, "column state named unknown columns");
        }
        outcome
    }

    /// Return every column to the state its definition describes, in
    /// definition order, and every group to its `openByDefault`.
    pub fn reset_column_state(&mut self) {
        let order: Vec<String> = self
            .definition_order()
            .into_iter()
            .map(str::to_owned)
            .collect();
        let order_refs: Vec<&str> = order.iter().map(String::as_str).collect();
        self.reorder(&order_refs);
        for column in &mut self.columns {
            column.reset();
        }
        assign_flagged_indices(&mut self.columns);
        for group in &mut self.groups {
            group.open = group.definition().open_by_default();
        }
    }

    /// Expanded state of every group, in definition order.
    #[must_use]
    pub fn group_state(&self) -> Vec<ColumnGroupState> {
        self.groups
            .iter()
            .map(|group| ColumnGroupState {
                group_id: group.id().to_owned(),
                open: group.is_open(),
            })
            .collect()
    }

    /// Restore saved group state. Groups not named are left as they are.
    pub fn apply_group_state(&mut self, states: &[ColumnGroupState]) -> StateApplication {
        let mut outcome = StateApplication::default();
        for state in states {
            match self
                .groups
                .iter_mut()
                .find(|group| group.id() == state.group_id)
            {
                Some(group) => {
                    group.open = state.open;
                    outcome.applied.push(state.group_id.clone());
                }
                None => outcome.unmatched.push(state.group_id.clone()),
            }
        }
        outcome
    }
}
