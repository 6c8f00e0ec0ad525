//! Coercion of dynamically-typed input into store arguments.
//!
//! Callers that hold loosely-typed data (JSON payloads, scripting bridges)
//! go through here before touching the store. Anything that is not an
//! integer quantity or a non-empty string name is refused.

use serde_json::Value;

use stocktrack_core::{ItemName, Quantity};

/// Integer quantity carried by `value`, if any.
///
/// Booleans count as 1 and 0. Floats are refused even when integral
/// (`10.0`), as are numeric strings.
pub fn quantity_from_value(value: &Value) -> Option<Quantity> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::Bool(b) => Some(Quantity::from(*b)),
        _ => None,
    }
}

/// Item name carried by `value`, if it is a non-empty string.
pub fn item_from_value(value: &Value) -> Option<ItemName> {
    value.as_str().and_then(ItemName::new)
}
