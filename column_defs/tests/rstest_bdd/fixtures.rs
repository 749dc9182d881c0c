//! Shared fixtures for the behavioural scenarios.

use column_defs::{ColumnChanges, ColumnDefinition, ColumnModel, ColumnTypeRegistry};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State shared by identifier and merge scenarios.
#[derive(Debug, Default, ScenarioState)]
pub struct ColumnsContext {
    pub definitions: Slot<Vec<ColumnDefinition>>,
    pub ids: Slot<Vec<String>>,
    pub defaults: Slot<ColumnDefinition>,
    pub types: Slot<ColumnTypeRegistry>,
    pub merged: Slot<ColumnDefinition>,
}

/// State shared by column change scenarios.
#[derive(Debug, Default, ScenarioState)]
pub struct ModelContext {
    pub model: Slot<ColumnModel>,
    pub immutable: Slot<bool>,
    pub changes: Slot<ColumnChanges>,
}

/// Fresh identifier and merge state.
#[fixture]
pub fn columns_context() -> ColumnsContext {
    ColumnsContext::default()
}

/// Fresh column change state.
#[fixture]
pub fn model_context() -> ModelContext {
    ModelContext::default()
}
