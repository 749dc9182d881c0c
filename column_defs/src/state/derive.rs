//! Initial state derived from effective definitions.

use serde_json::Value;

use super::{ColumnState, Pinned, SortDirection};
use crate::{Column, ColumnDefinition};

/// Width of a column whose definition sets none.
pub const DEFAULT_WIDTH: u32 = 200;
/// Lower width bound of a column whose definition sets no `minWidth`.
pub const DEFAULT_MIN_WIDTH: u32 = 20;

pub(crate) struct InitialState {
    pub(crate) state: ColumnState,
    pub(crate) sort: Option<SortDirection>,
    pub(crate) pivot_index: Option<usize>,
}

/// Clamp `width` to the definition's `minWidth` and `maxWidth`.
pub(crate) fn clamp_width(width: u64, definition: &ColumnDefinition) -> u32 {
    let min = definition
        .u64_value("minWidth")
        .unwrap_or_else(|| u64::from(DEFAULT_MIN_WIDTH));
    let at_least_min = width.max(min);
    let bounded = definition
        .u64_value("maxWidth")
        .map_or(at_least_min, |max| at_least_min.min(max));
    u32::try_from(bounded).unwrap_or(u32::MAX)
}

fn index_value(definition: &ColumnDefinition, key: &str) -> Option<usize> {
    definition
        .u64_value(key)
        .and_then(|index| usize::try_from(index).ok())
}

fn pinned_value(definition: &ColumnDefinition) -> Option<Pinned> {
    match definition.get("pinned") {
        Some(Value::String(side)) if side == "left" => Some(Pinned::Left),
        Some(Value::String(side)) if side == "right" => Some(Pinned::Right),
        Some(Value::Bool(true)) => Some(Pinned::Left),
        _ => None,
    }
}

fn sort_value(definition: &ColumnDefinition) -> Option<SortDirection> {
    match definition.str_value("sort") {
        Some("asc") => Some(SortDirection::Asc),
        Some("desc") => Some(SortDirection::Desc),
        _ => None,
    }
}

pub(crate) fn initial_state(id: &str, definition: &ColumnDefinition) -> InitialState {
    let width = definition
        .u64_value("width")
        .unwrap_or_else(|| u64::from(DEFAULT_WIDTH));
    InitialState {
        state: ColumnState {
            col_id: id.to_owned(),
            agg_func: definition.str_value("aggFunc").map(str::to_owned),
            hide: definition.bool_value("hide").unwrap_or(false),
            row_group_index: index_value(definition, "rowGroupIndex"),
            width: clamp_width(width, definition),
            pinned: pinned_value(definition),
        },
        sort: sort_value(definition),
        pivot_index: index_value(definition, "pivotIndex"),
    }
}

fn row_group_slot(column: &mut Column) -> &mut Option<usize> {
    &mut column.state.row_group_index
}

fn pivot_slot(column: &mut Column) -> &mut Option<usize> {
    &mut column.pivot_index
}

fn is_auto_flagged(column: &Column, flag: &str, explicit_key: &str) -> bool {
    column.definition().bool_value(flag) == Some(true)
        && index_value(column.definition(), explicit_key).is_none()
}

/// Give `eligible` columns flagged with `flag` but no index the positions
/// after the largest index any column holds, in column order.
///
/// Positions past `usize::MAX` are left unassigned.
fn assign_flagged(
    columns: &mut [Column],
    flag: &str,
    slot: fn(&mut Column) -> &mut Option<usize>,
    eligible: &dyn Fn(&Column) -> bool,
) {
    let is_pending = |column: &mut Column| {
        eligible(&*column)
            && column.definition().bool_value(flag) == Some(true)
            && slot(column).is_none()
    };
    if !columns.iter_mut().any(is_pending) {
        return;
    }
    let mut next = columns
        .iter_mut()
        .filter_map(|column| *slot(column))
        .max()
        .map_or(Some(0), |max| max.checked_add(1));
    for column in columns.iter_mut() {
        let Some(index) = next else {
            break;
        };
        if is_pending(column) {
            *slot(column) = Some(index);
            next = index.checked_add(1);
        }
    }
}

/// Resolve `rowGroup: true` and `pivot: true` into indices.
pub(crate) fn assign_flagged_indices(columns: &mut [Column]) {
    assign_flagged(columns, "rowGroup", row_group_slot, &|_| true);
    assign_flagged(columns, "pivot", pivot_slot, &|_| true);
}

/// Re-number the flagged indices of columns accepted by `is_added` so they
/// follow every index already held by the other columns.
///
/// Only indices that came from a `rowGroup`/`pivot` flag are moved; explicit
/// `rowGroupIndex`/`pivotIndex` values stay.
pub(crate) fn renumber_flagged_indices(
    columns: &mut [Column],
    is_added: &dyn Fn(&Column) -> bool,
) {
    for column in columns.iter_mut().filter(|column| is_added(column)) {
        if is_auto_flagged(column, "rowGroup", "rowGroupIndex") {
            column.state.row_group_index = None;
        }
        if is_auto_flagged(column, "pivot", "pivotIndex") {
            column.pivot_index = None;
        }
    }
    assign_flagged(columns, "rowGroup", row_group_slot, is_added);
    assign_flagged(columns, "pivot", pivot_slot, is_added);
}
