//! Shape helpers over the untyped document value.
//!
//! Handoff documents arrive from other processes and are malformed by
//! construction, so the rule engine never deserializes them into native
//! structs. It reads a [`Value`] and checks the shape of every node before
//! looking at its contents.

use serde_json::{Map, Value};

/// An object node of a parsed document. Key order follows the input.
pub type Object = Map<String, Value>;

/// Looks up `key`, treating an explicit `null` the same as an absent key.
pub fn provided<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

/// Returns the string if `value` is a string with at least one
/// non-whitespace character.
pub fn non_blank_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// Returns the member of `allowed` that `value` names, if any.
///
/// Non-string values never match, so `null`, numbers and nested
/// containers all fail membership.
pub fn enum_member<'a>(value: Option<&Value>, allowed: &[&'a str]) -> Option<&'a str> {
    let Some(Value::String(s)) = value else {
        return None;
    };
    allowed.iter().copied().find(|candidate| *candidate == s.as_str())
}

/// True if `value` is an array whose entries are all non-blank strings.
/// The empty array qualifies.
pub fn is_non_blank_string_array(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Array(items)) => items.iter().all(|item| non_blank_str(Some(item)).is_some()),
        _ => false,
    }
}

/// True if `value` is either absent, `null`, or a string.
pub fn is_optional_string(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null) | Some(Value::String(_)))
}

/// Short name of a node's shape, used in log output.
pub fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
