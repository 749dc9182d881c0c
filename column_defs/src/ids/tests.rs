//! Tests for identifier resolution.

use std::collections::HashSet;

use rstest::rstest;
use serde_json::{Value, json};

use super::{ColumnIdResolver, resolve_column_ids, unique_id};
use crate::ColumnDefinition;

fn defs(value: Value) -> Vec<ColumnDefinition> {
    serde_json::from_value(value).expect("definition fixtures must be objects")
}

#[rstest]
fn documented_scenario_resolves_by_position() {
    let ids = resolve_column_ids(&defs(json!([
        {"colId": "c1"}, {"colId": "c1"},
        {"field": "age"}, {"field": "age"},
        {}, {}
    ])));
    assert_eq!(ids, vec!["c1", "c1_1", "age", "age_1", "4", "5"]);
}

#[rstest]
fn col_id_takes_precedence_over_field() {
    let ids = resolve_column_ids(&defs(json!([{"colId": "x", "field": "y"}, {"field": "x"}])));
    assert_eq!(ids, vec!["x", "x_1"]);
}

#[rstest]
fn repeated_collisions_count_upwards() {
    let ids = resolve_column_ids(&defs(json!([
        {"colId": "a"}, {"colId": "a"}, {"colId": "a"}, {"field": "a"}
    ])));
    assert_eq!(ids, vec!["a", "a_1", "a_2", "a_3"]);
}

#[rstest]
fn placeholders_collide_with_numeric_fields() {
    let ids = resolve_column_ids(&defs(json!([{"field": "1"}, {}])));
    assert_eq!(ids, vec!["1", "1_1"]);
}

#[rstest]
fn explicit_suffix_lookalikes_are_skipped() {
    let ids = resolve_column_ids(&defs(json!([{"colId": "a_1"}, {"colId": "a"}, {"colId": "a"}])));
    assert_eq!(ids, vec!["a_1", "a", "a_2"]);
}

#[rstest]
fn empty_input_resolves_to_nothing() {
    assert!(resolve_column_ids(&[]).is_empty());
}

#[rstest]
fn resolved_ids_are_pairwise_unique() {
    let ids = resolve_column_ids(&defs(json!([
        {"field": "0"}, {}, {"colId": "0_1"}, {}, {"field": "1"}, {"colId": ""}, {}
    ])));
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate id in {ids:?}");
}

#[rstest]
fn unique_id_leaves_free_candidates_untouched() {
    let assigned: HashSet<String> = HashSet::new();
    assert_eq!(unique_id("athlete", &assigned), "athlete");
}

#[rstest]
fn resolver_tracks_claims_within_a_pass() {
    let mut resolver = ColumnIdResolver::new();
    assert_eq!(resolver.claim("g"), "g");
    assert!(resolver.is_assigned("g"));
    assert_eq!(resolver.claim("g"), "g_1");
    assert!(!ColumnIdResolver::new().is_assigned("g"));
}
