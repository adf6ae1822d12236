//! Snapshot renderers shared by the corpus modules.
//!
//! These render `Value` snapshots the way the engine under test would
//! stringify them, so expected values can be written down literally.

use harness_types::Value;

/// Renders one element for a join, JavaScript-style: `undefined` and
/// `null` render as the empty string.
fn join_element(value: &Value) -> String {
    match value {
        Value::Undefined | Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Joins elements with a separator, JavaScript `Array.prototype.join`
/// style.
pub(crate) fn join(values: &[Value], separator: &str) -> String {
    values
        .iter()
        .map(join_element)
        .collect::<Vec<_>>()
        .join(separator)
}
