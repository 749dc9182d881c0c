//! Subcommand implementations for `gridcols`.
//!
//! Each command returns a serialisable report; writing it is left to the
//! caller.

use std::collections::BTreeMap;
use std::sync::Arc;

use camino::Utf8Path;
use column_defs::merge::MergeProvenance;
use column_defs::{
    AggregatedErrors, ColumnChanges, ColumnDefinition, ColumnError, ColumnGroupState, ColumnModel,
    ColumnNode, ColumnResult, ColumnState, GridColumnOptions, GridOptionOverrides,
    StateApplication, build_columns, explain_column_definition, load_column_state,
    load_grid_options_with,
};
use serde::Serialize;

use crate::error::GridcolsError;

/// One column of a `resolve` report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedColumn {
    /// Resolved id.
    pub id: String,
    /// Effective definition after merging.
    pub definition: ColumnDefinition,
    /// Winning layer per property; only present with `--explain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<BTreeMap<String, MergeProvenance>>,
}

/// Output of the `state` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateReport {
    /// Column state in display order.
    pub columns: Vec<ColumnState>,
    /// Group expanded state in definition order.
    pub groups: Vec<ColumnGroupState>,
    /// Outcome of `--apply`, when given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<StateApplication>,
}

/// Output of the `diff` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffReport {
    /// Kept, added and removed ids.
    pub changes: ColumnChanges,
    /// Column state after the replacement, in display order.
    pub columns: Vec<ColumnState>,
}

fn load(path: &Utf8Path) -> Result<GridColumnOptions, GridcolsError> {
    Ok(load_with(path, &GridOptionOverrides::default())?)
}

fn load_with(
    path: &Utf8Path,
    overrides: &GridOptionOverrides,
) -> ColumnResult<GridColumnOptions> {
    let options = load_grid_options_with(path, overrides)?;
    tracing::info!(path = %path, roots = options.column_defs.len(), "loaded grid options");
    Ok(options)
}

/// Resolved column ids in definition order.
///
/// # Errors
///
/// Returns an error when the options file cannot be loaded.
pub fn ids(path: &Utf8Path) -> Result<Vec<String>, GridcolsError> {
    let tree = build_columns(&load(path)?);
    Ok(tree
        .definition_order()
        .into_iter()
        .map(str::to_owned)
        .collect())
}

/// Effective definition of every column, optionally with the layer behind
/// each property.
///
/// # Errors
///
/// Returns an error when the options file cannot be loaded.
pub fn resolve(path: &Utf8Path, should_explain: bool) -> Result<Vec<ResolvedColumn>, GridcolsError> {
    let options = load(path)?;
    let tree = build_columns(&options);
    let types = options.type_registry();
    let leaves = options.column_defs.iter().flat_map(ColumnNode::leaves);

    let report = tree
        .definition_order()
        .into_iter()
        .zip(leaves)
        .filter_map(|(id, raw)| {
            let column = tree.column(id)?;
            let sources = should_explain.then(|| {
                let trace = explain_column_definition(&options.default_col_def, &types, raw);
                column
                    .definition()
                    .as_map()
                    .keys()
                    .filter_map(|key| {
                        trace
                            .source_of(key)
                            .map(|source| (key.clone(), source.clone()))
                    })
                    .collect()
            });
            Some(ResolvedColumn {
                id: id.to_owned(),
                definition: column.definition().clone(),
                sources,
            })
        })
        .collect();
    Ok(report)
}

/// State of a freshly built grid, optionally after restoring saved state.
///
/// # Errors
///
/// Returns an error when the options or state file cannot be loaded.
pub fn state(path: &Utf8Path, apply: Option<&Utf8Path>) -> Result<StateReport, GridcolsError> {
    let mut tree = build_columns(&load(path)?);
    let application = apply
        .map(|state_path| -> Result<StateApplication, GridcolsError> {
            let states = load_column_state(state_path)?;
            let outcome = tree.apply_column_state(&states);
            tracing::info!(
                applied = outcome.applied.len(),
                unmatched = outcome.unmatched.len(),
                "restored column state"
            );
            Ok(outcome)
        })
        .transpose()?;
    Ok(StateReport {
        columns: tree.column_state(),
        groups: tree.group_state(),
        application,
    })
}

/// Build a grid from `old`, replace its definitions with `new` and report
/// what changed.
///
/// # Errors
///
/// Returns an error when either options file cannot be loaded; when both
/// fail, the error carries both failures.
pub fn diff(old: &Utf8Path, new: &Utf8Path, is_immutable: bool) -> Result<DiffReport, GridcolsError> {
    let overrides = GridOptionOverrides {
        immutable_columns: is_immutable.then_some(true),
    };
    let (before, after) = match (
        load_with(old, &GridOptionOverrides::default()),
        load_with(new, &overrides),
    ) {
        (Ok(before), Ok(after)) => (before, after),
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => return Err(err.into()),
        (Err(first), Err(second)) => {
            let both = AggregatedErrors::new(vec![first, second]);
            return Err(Arc::new(ColumnError::Aggregate(Box::new(both))).into());
        }
    };
    let mut model = ColumnModel::new(&before);
    let changes = model.set_column_defs(&after);
    tracing::info!(
        kept = changes.kept.len(),
        added = changes.added.len(),
        removed = changes.removed.len(),
        "replaced column definitions"
    );
    Ok(DiffReport {
        changes,
        columns: model.tree().column_state(),
    })
}
