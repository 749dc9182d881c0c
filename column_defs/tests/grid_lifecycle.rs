//! End-to-end coverage: load grid options from disk, build the columns,
//! save and restore their state, then replace the definitions.

use anyhow::{Result, anyhow, ensure};
use camino::Utf8Path;
use column_defs::{
    ColumnGroup, ColumnModel, GridOptionOverrides, Pinned, RIGHT_ALIGNED_CELL_CLASS, build_columns,
    load_column_state, load_grid_options, load_grid_options_with,
};
use rstest::rstest;
use test_helpers::figment::{figment_error, with_jail};

const GRID_TOML: &str = r#"
immutableColumns = false

[defaultColDef]
width = 120
resizable = true

[columnTypes.medal]
width = 90
filter = "number"

[[columnDefs]]
headerName = "Athlete"

[[columnDefs.children]]
field = "athlete"
pinned = "left"

[[columnDefs.children]]
field = "age"
type = "numericColumn"

[[columnDefs]]
field = "gold"
type = "medal"

[[columnDefs]]
field = "silver"
type = "medal"
hide = true
"#;

#[rstest]
fn loads_and_builds_a_grid_from_toml() -> Result<()> {
    let tree = with_jail(|jail| {
        jail.create_file("grid.toml", GRID_TOML)?;
        let options = load_grid_options(Utf8Path::new("grid.toml")).map_err(figment_error)?;
        Ok(build_columns(&options))
    })?;

    ensure!(tree.ids() == ["athlete", "age", "gold", "silver"], "ids {:?}", tree.ids());
    ensure!(tree.groups().len() == 1, "expected one group");

    let age = tree.column("age").ok_or_else(|| anyhow!("missing age"))?;
    ensure!(
        age.definition().str_value("cellClass") == Some(RIGHT_ALIGNED_CELL_CLASS),
        "numericColumn type should right-align"
    );
    ensure!(age.state().width == 120, "default width should apply");
    ensure!(age.parent() == tree.groups().first().map(ColumnGroup::id), "age sits in the group");

    let gold = tree.column("gold").ok_or_else(|| anyhow!("missing gold"))?;
    ensure!(gold.state().width == 90, "type width should beat the defaults");

    let athlete = tree.column("athlete").ok_or_else(|| anyhow!("missing athlete"))?;
    ensure!(athlete.state().pinned == Some(Pinned::Left), "athlete pinned left");

    let silver = tree.column("silver").ok_or_else(|| anyhow!("missing silver"))?;
    ensure!(!silver.is_visible(), "silver starts hidden");
    Ok(())
}

#[rstest]
fn overrides_replace_file_values() -> Result<()> {
    let options = with_jail(|jail| {
        jail.create_file("grid.json", r#"{"columnDefs": [{"field": "a"}]}"#)?;
        let overrides = GridOptionOverrides {
            immutable_columns: Some(true),
        };
        load_grid_options_with(Utf8Path::new("grid.json"), &overrides).map_err(figment_error)
    })?;
    ensure!(options.immutable_columns, "override should win over the file");
    ensure!(options.column_defs.len() == 1, "columns should load");
    Ok(())
}

#[rstest]
fn saved_state_restores_onto_a_fresh_grid() -> Result<()> {
    let (mut restored, application) = with_jail(|jail| {
        jail.create_file("grid.toml", GRID_TOML)?;
        let options = load_grid_options(Utf8Path::new("grid.toml")).map_err(figment_error)?;

        let mut original = build_columns(&options);
        if let Some(gold) = original.column_mut("gold") {
            gold.set_width(300);
        }
        let saved = serde_json::to_string(&original.column_state()).map_err(figment_error)?;
        jail.create_file("state.json", &saved)?;

        let states = load_column_state(Utf8Path::new("state.json")).map_err(figment_error)?;
        let mut restored = build_columns(&options);
        let application = restored.apply_column_state(&states);
        Ok((restored, application))
    })?;

    ensure!(application.unmatched.is_empty(), "every record should match");
    ensure!(application.applied.len() == 4, "four records applied");
    let gold_width = restored.column("gold").map(|c| c.state().width);
    ensure!(gold_width == Some(300), "saved width restored, got {gold_width:?}");

    restored.reset_column_state();
    let gold_width = restored.column("gold").map(|c| c.state().width);
    ensure!(gold_width == Some(90), "reset returns to the definition width");
    Ok(())
}

#[rstest]
fn replacing_definitions_reports_changes() -> Result<()> {
    let (first, second) = with_jail(|jail| {
        jail.create_file("first.toml", GRID_TOML)?;
        jail.create_file(
            "second.json",
            r#"{"columnDefs": [{"field": "gold"}, {"field": "bronze"}]}"#,
        )?;
        let first = load_grid_options(Utf8Path::new("first.toml")).map_err(figment_error)?;
        let second = load_grid_options(Utf8Path::new("second.json")).map_err(figment_error)?;
        Ok((first, second))
    })?;

    let mut model = ColumnModel::new(&first);
    let changes = model.set_column_defs(&second);
    ensure!(changes.kept == ["gold"], "kept {:?}", changes.kept);
    ensure!(changes.added == ["bronze"], "added {:?}", changes.added);
    ensure!(
        changes.removed == ["athlete", "age", "silver"],
        "removed {:?}",
        changes.removed
    );
    ensure!(model.tree().groups().is_empty(), "the group went away");
    Ok(())
}
