//! Text normalisation helpers for behavioural test suites.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Normalises a scalar placeholder by trimming and unquoting one outer layer.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).trim().to_owned()
}

/// Splits a comma-separated placeholder into normalised entries.
///
/// An empty (or all-whitespace) input yields an empty list so steps can
/// express "no columns" as `""`.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    let inner = unquote(value);
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(normalize_scalar).collect()
}
