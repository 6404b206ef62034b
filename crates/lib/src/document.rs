//! Document value types re-exported from `serde_json`.
//!
//! The document tree itself is external to this library: conversions target
//! [`serde_json::Value`], the ecosystem's standard JSON representation. This
//! module re-exports the types a conversion implementation needs so that
//! client code doesn't have to add `serde_json` as a separate dependency.

pub use serde_json::{Map, Number, Value, json};

/// Returns the document kind of a value as a static name.
///
/// Used in error reporting to describe what a document value actually was
/// when it did not match the shape a conversion expected.
///
/// # Examples
///
/// ```
/// use docbind::document::{json, kind_name};
///
/// assert_eq!(kind_name(&json!(null)), "null");
/// assert_eq!(kind_name(&json!(42)), "number");
/// assert_eq!(kind_name(&json!({"a": 1})), "object");
/// ```
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
