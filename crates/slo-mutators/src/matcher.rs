//! Canonical label-matcher encoding for generated expressions.

use std::collections::HashMap;

/// Encodes a label set as a comma-joined `key="value"` matcher body.
///
/// Keys are sorted lexicographically before joining, so the output is
/// deterministic for a given label set regardless of map iteration order.
/// The encoded string is embedded inside generated expressions and must be
/// stable across runs.
///
/// Values are inserted verbatim; callers must ensure they are safe in the
/// target query syntax. An empty map yields an empty string.
#[must_use]
pub fn encode_label_matcher(labels: &HashMap<String, String>) -> String {
    let mut keys: Vec<&String> = labels.keys().collect();
    keys.sort();

    let parts: Vec<String> = keys
        .iter()
        .filter_map(|k| labels.get(*k).map(|v| format!(r#"{k}="{v}""#)))
        .collect();
    parts.join(",")
}
