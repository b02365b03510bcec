//! JSON value helpers

use serde_json::Value;

/// Recursively merge `source` into `target`.
///
/// Objects merge key-wise, arrays concatenate, anything else in `source`
/// replaces the value in `target`.
pub fn merge_json(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(source)) => {
            target.extend(source);
        }
        (target, source) => *target = source,
    }
}

/// Whether a value is "empty": null, an empty array, or an empty object.
///
/// Scalars (including the empty string) are never empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
