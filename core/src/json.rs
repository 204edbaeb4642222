//! Resolve-or-default accessors over loosely structured JSON.
//!
//! Graph descriptions are hand-written or produced by ad-hoc exporters, so
//! any field may be missing or have an unexpected shape. Builders read
//! every field through these helpers: a field of the wrong shape is
//! treated as absent, never as an error.
use graphjson_data::prelude::*;
use serde_json::Value as JsonValue;

/// Keys that may carry a node's type name, by priority.
pub const TYPE_KEYS: [&str; 3] = ["type", "op_type", "layer_type"];

/// Type name of nodes that declare none.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Items of a field that should be a sequence.
///
/// Arrays yield their items, null or missing yields nothing, any other
/// value is taken as a one-item sequence.
pub fn as_list(v: Option<&JsonValue>) -> Vec<&JsonValue> {
    match v {
        None | Some(JsonValue::Null) => vec![],
        Some(JsonValue::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}

/// The array under `key`, if it is one.
pub fn array<'a>(v: &'a JsonValue, key: &str) -> Option<&'a Vec<JsonValue>> {
    v.get(key).and_then(|it| it.as_array())
}

/// The object under `key`, if it is one.
pub fn object<'a>(v: &'a JsonValue, key: &str) -> Option<&'a serde_json::Map<String, JsonValue>> {
    v.get(key).and_then(|it| it.as_object())
}

/// The string under `key`, if present and not empty.
pub fn non_empty_str<'a>(v: &'a JsonValue, key: &str) -> Option<&'a str> {
    v.get(key).and_then(|it| it.as_str()).filter(|s| !s.is_empty())
}

/// The first of `keys` holding a non-empty string, with the key it was
/// found under.
pub fn first_non_empty_str<'a, 'k>(
    v: &'a JsonValue,
    keys: &[&'k str],
) -> Option<(&'k str, &'a str)> {
    keys.iter().find_map(|k| non_empty_str(v, k).map(|s| (*k, s)))
}

/// Type name of a node record, with the key it was read from.
pub fn node_type(raw: &JsonValue) -> (&'static str, &str) {
    first_non_empty_str(raw, &TYPE_KEYS).unwrap_or(("type", UNKNOWN_TYPE))
}

pub fn str_or_default(v: &JsonValue, key: &str, default: &str) -> String {
    non_empty_str(v, key).unwrap_or(default).to_string()
}

/// Name carried by a node input or output reference: a bare string, or an
/// object's `name` (empty if it has none). Other values are not
/// references.
pub fn reference_name(item: &JsonValue) -> Option<&str> {
    match item {
        JsonValue::String(s) => Some(s),
        JsonValue::Object(map) => Some(map.get("name").and_then(|n| n.as_str()).unwrap_or("")),
        _ => None,
    }
}

/// Does the value count as set? Null, `false`, zero and `""` do not.
pub fn is_truthy(v: &JsonValue) -> bool {
    match v {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64() != Some(0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// The shape explicitly declared under `shape`, if any. An unset `shape`
/// (`""`, `0`, ...) declares nothing.
pub fn declared_shape(v: &JsonValue) -> Option<TensorShape> {
    v.get("shape").filter(|s| is_truthy(s)).and_then(TensorShape::from_json)
}

/// Render a scalar for display: strings as they are, other values as JSON.
pub fn display_scalar(v: &JsonValue) -> String {
    match v {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
