// SPDX-License-Identifier: MIT

//! Field access helpers for loose backend rows.
//!
//! Legacy backend rows drift in column-name case and sometimes deliver
//! numbers as strings. These helpers are the only place that deals with
//! that: rows are converted to strict records at one boundary and dropped
//! there if unusable.

use serde_json::Value;

/// First matching key whose value parses as a finite number.
pub(crate) fn numeric_field(row: &Value, names: &[&str]) -> Option<f64> {
    names.iter().find_map(|name| row.get(*name).and_then(as_f64))
}

/// First matching key whose value renders as a string.
pub(crate) fn string_field(row: &Value, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| row.get(*name).and_then(as_string))
}

/// Finite number, accepting numeric strings ("45.9") but rejecting "NaN".
pub(crate) fn as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Stringified id/name, trimmed. Numeric ids are rendered as-is.
pub(crate) fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
