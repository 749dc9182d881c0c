//! Step implementations for identifier, merge and change scenarios.

use anyhow::{Result, anyhow, ensure};
use column_defs::{
    ColumnDefinition, ColumnModel, ColumnTypeRegistry, GridColumnOptions, merge_column_definition,
    resolve_column_ids,
};
use rstest_bdd_macros::{given, then, when};
use serde_json::Value;
use test_helpers::{json, text};

use crate::fixtures::{ColumnsContext, ModelContext};

fn definition(raw: &str) -> Result<ColumnDefinition> {
    Ok(json::object(json::parse(text::unquote(raw))?)?.into())
}

fn options(raw: &str, immutable: bool) -> Result<GridColumnOptions> {
    let column_defs = serde_json::from_value(json::parse(text::unquote(raw))?)?;
    Ok(GridColumnOptions {
        column_defs,
        immutable_columns: immutable,
        ..GridColumnOptions::default()
    })
}

#[given("the column definitions {definitions}")]
fn given_definitions(columns_context: &ColumnsContext, definitions: String) -> Result<()> {
    let parsed: Vec<ColumnDefinition> =
        serde_json::from_value(json::parse(text::unquote(&definitions))?)?;
    columns_context.definitions.set(parsed);
    Ok(())
}

#[when("the column ids are resolved")]
fn resolve_ids(columns_context: &ColumnsContext) -> Result<()> {
    let ids = columns_context
        .definitions
        .with_ref(|definitions| resolve_column_ids(definitions))
        .ok_or_else(|| anyhow!("definitions must be given first"))?;
    columns_context.ids.set(ids);
    Ok(())
}

#[then("the resolved ids are {expected}")]
fn resolved_ids_match(columns_context: &ColumnsContext, expected: String) -> Result<()> {
    let ids = columns_context
        .ids
        .take()
        .ok_or_else(|| anyhow!("ids must be resolved first"))?;
    let expected_ids = text::split_list(&expected);
    ensure!(ids == expected_ids, "resolved {ids:?}; expected {expected_ids:?}");
    Ok(())
}

#[given("the default column definition {defaults}")]
fn given_defaults(columns_context: &ColumnsContext, defaults: String) -> Result<()> {
    columns_context.defaults.set(definition(&defaults)?);
    Ok(())
}

#[given("the column type {name} defined as {partial}")]
fn given_column_type(columns_context: &ColumnsContext, name: String, partial: String) -> Result<()> {
    let mut registry = columns_context.types.take().unwrap_or_default();
    registry.insert(text::normalize_scalar(&name), definition(&partial)?);
    columns_context.types.set(registry);
    Ok(())
}

#[when("the column definition {column} is merged")]
fn merge_column(columns_context: &ColumnsContext, column: String) -> Result<()> {
    let defaults = columns_context.defaults.take().unwrap_or_default();
    let types = columns_context
        .types
        .take()
        .unwrap_or_else(ColumnTypeRegistry::new);
    let merged = merge_column_definition(&defaults, &types, &definition(&column)?);
    columns_context.merged.set(merged);
    Ok(())
}

#[then("the effective {key} is {value}")]
fn effective_value(columns_context: &ColumnsContext, key: String, value: String) -> Result<()> {
    let expected: Value = json::parse(value.trim())?;
    let property = text::normalize_scalar(&key);
    let actual = columns_context
        .merged
        .with_ref(|merged| merged.get(&property).cloned())
        .ok_or_else(|| anyhow!("a definition must be merged first"))?;
    ensure!(
        actual.as_ref() == Some(&expected),
        "effective {property} was {actual:?}; expected {expected}"
    );
    Ok(())
}

#[given("a grid with columns {columns}")]
fn given_grid(model_context: &ModelContext, columns: String) -> Result<()> {
    model_context.model.set(ColumnModel::new(&options(&columns, false)?));
    model_context.immutable.set(false);
    Ok(())
}

#[given("a grid with immutable columns {columns}")]
fn given_immutable_grid(model_context: &ModelContext, columns: String) -> Result<()> {
    model_context.model.set(ColumnModel::new(&options(&columns, true)?));
    model_context.immutable.set(true);
    Ok(())
}

#[given("the user resizes {column} to {width}")]
fn resize_column(model_context: &ModelContext, column: String, width: u32) -> Result<()> {
    let mut model = model_context
        .model
        .take()
        .ok_or_else(|| anyhow!("a grid must be given first"))?;
    let id = text::normalize_scalar(&column);
    model
        .tree_mut()
        .column_mut(&id)
        .ok_or_else(|| anyhow!("no column {id}"))?
        .set_width(width);
    model_context.model.set(model);
    Ok(())
}

#[when("the columns are replaced with {columns}")]
fn replace_columns(model_context: &ModelContext, columns: String) -> Result<()> {
    let immutable = model_context.immutable.with_ref(|flag| *flag).unwrap_or(false);
    let mut model = model_context
        .model
        .take()
        .ok_or_else(|| anyhow!("a grid must be given first"))?;
    let changes = model.set_column_defs(&options(&columns, immutable)?);
    model_context.model.set(model);
    model_context.changes.set(changes);
    Ok(())
}

#[then("the changes are kept {kept}, added {added}, removed {removed}")]
fn changes_match(
    model_context: &ModelContext,
    kept: String,
    added: String,
    removed: String,
) -> Result<()> {
    let changes = model_context
        .changes
        .take()
        .ok_or_else(|| anyhow!("columns must be replaced first"))?;
    ensure!(changes.kept == text::split_list(&kept), "kept {:?}", changes.kept);
    ensure!(changes.added == text::split_list(&added), "added {:?}", changes.added);
    ensure!(
        changes.removed == text::split_list(&removed),
        "removed {:?}",
        changes.removed
    );
    Ok(())
}

#[then("column {column} has width {width}")]
fn column_width(model_context: &ModelContext, column: String, width: u32) -> Result<()> {
    let id = text::normalize_scalar(&column);
    let actual = model_context
        .model
        .with_ref(|model| model.tree().column(&id).map(|c| c.state().width))
        .flatten()
        .ok_or_else(|| anyhow!("no column {id}"))?;
    ensure!(actual == width, "column {id} has width {actual}; expected {width}");
    Ok(())
}

#[then("the display order is {order}")]
fn display_order(model_context: &ModelContext, order: String) -> Result<()> {
    let ids: Vec<String> = model_context
        .model
        .with_ref(|model| model.tree().ids().into_iter().map(str::to_owned).collect())
        .ok_or_else(|| anyhow!("a grid must be given first"))?;
    let expected = text::split_list(&order);
    ensure!(ids == expected, "display order {ids:?}; expected {expected:?}");
    Ok(())
}
