//! JSON fixture helpers for column definition tests.

use anyhow::{Result, anyhow};
use serde_json::{Map, Value};

/// Unwraps a JSON object literal into its map.
///
/// # Errors
///
/// Returns an error when `value` is not a JSON object.
pub fn object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!("expected a JSON object, got {other}")),
    }
}

/// Parses a JSON document written inline in a feature file or test.
///
/// # Errors
///
/// Returns an error when `text` is not valid JSON.
pub fn parse(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|err| anyhow!("invalid JSON fixture {text}: {err}"))
}
