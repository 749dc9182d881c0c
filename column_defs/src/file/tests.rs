//! Tests for options and state file loading.

use anyhow::{Result, anyhow, ensure};
use camino::Utf8Path;
use rstest::rstest;
use serde_json::json;
use test_helpers::figment::{figment_error, with_jail};

use super::{GridOptionOverrides, load_column_state, load_grid_options, load_grid_options_with, parse_column_state};
use crate::{ColumnError, ColumnNode, Pinned};

const TOML_OPTIONS: &str = r#"
immutableColumns = false

[defaultColDef]
width = 100
editable = true

[columnTypes.nonEditableColumn]
editable = false

[[columnDefs]]
field = "athlete"

[[columnDefs]]
headerName = "Details"
groupId = "details"

[[columnDefs.children]]
field = "age"
type = ["numericColumn", "nonEditableColumn"]
"#;

#[rstest]
fn toml_options_load() -> Result<()> {
    let options = with_jail(|jail| {
        jail.create_file("grid.toml", TOML_OPTIONS)?;
        load_grid_options(Utf8Path::new("grid.toml")).map_err(figment_error)
    })?;
    ensure!(options.column_defs.len() == 2, "expected two root nodes");
    ensure!(
        options.default_col_def.get("width") == Some(&json!(100)),
        "default width lost: {:?}",
        options.default_col_def
    );
    ensure!(options.column_types.contains_key("nonEditableColumn"));
    let Some(ColumnNode::Group { children, .. }) = options.column_defs.get(1) else {
        return Err(anyhow!("expected the second node to be a group"));
    };
    ensure!(children.len() == 1, "expected one child column");
    Ok(())
}

#[rstest]
fn json_options_load_with_overrides() -> Result<()> {
    let options = with_jail(|jail| {
        jail.create_file(
            "grid.json",
            r#"{"columnDefs": [{"colId": "c1", "pinned": null}], "immutableColumns": false}"#,
        )?;
        let overrides = GridOptionOverrides {
            immutable_columns: Some(true),
        };
        load_grid_options_with(Utf8Path::new("grid.json"), &overrides).map_err(figment_error)
    })?;
    ensure!(options.immutable_columns, "override should win over the file");
    ensure!(options.column_defs.len() == 1);
    Ok(())
}

#[rstest]
fn missing_files_are_file_errors() {
    let err = load_grid_options(Utf8Path::new("does/not/exist.toml"))
        .expect_err("missing file must fail");
    assert!(matches!(err.as_ref(), ColumnError::File { .. }), "got {err:?}");
}

#[rstest]
fn malformed_toml_names_the_file() -> Result<()> {
    let err = with_jail(|jail| {
        jail.create_file("broken.toml", "columnDefs = [")?;
        Ok(load_grid_options(Utf8Path::new("broken.toml")).expect_err("broken TOML must fail"))
    })?;
    ensure!(
        matches!(err.as_ref(), ColumnError::File { path, .. } if path.as_str() == "broken.toml"),
        "unexpected error: {err:?}"
    );
    Ok(())
}

#[rstest]
fn malformed_nodes_are_gathering_errors() -> Result<()> {
    let err = with_jail(|jail| {
        jail.create_file("grid.json", r#"{"columnDefs": [{"children": 3}]}"#)?;
        Ok(load_grid_options(Utf8Path::new("grid.json")).expect_err("bad children must fail"))
    })?;
    ensure!(
        matches!(err.as_ref(), ColumnError::Gathering(_)),
        "unexpected error: {err:?}"
    );
    Ok(())
}

#[rstest]
fn state_documents_parse() -> Result<()> {
    let states = parse_column_state(
        r#"[{"colId": "age", "aggFunc": null, "hide": true, "rowGroupIndex": null, "width": 90, "pinned": "left"}]"#,
    )
    .map_err(|err| anyhow!(err.to_string()))?;
    ensure!(states.first().and_then(|s| s.pinned) == Some(Pinned::Left));
    ensure!(parse_column_state("{}").is_err(), "objects are not state documents");
    Ok(())
}

#[rstest]
fn state_files_load() -> Result<()> {
    let states = with_jail(|jail| {
        jail.create_file("state.json", r#"[{"colId": "a", "width": 120}]"#)?;
        load_column_state(Utf8Path::new("state.json")).map_err(figment_error)
    })?;
    ensure!(states.len() == 1);
    ensure!(states.first().is_some_and(|s| !s.hide && s.width == 120));
    Ok(())
}
