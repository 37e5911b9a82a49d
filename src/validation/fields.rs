//! Typed field access.
//!
//! Strict accessors over a JSON object: a field is either present with the
//! expected JSON type or the lookup fails with a [`ValidationError`]. No
//! coercion between types, and `null` is a type mismatch rather than a
//! missing field.

use serde_json::{Map, Value};

use super::error::{JsonType, ValidationError};
use super::path::FieldPath;

/// Require `value` (located at `path`) to be a JSON object.
pub fn require_object<'a>(
    value: &'a Value,
    path: &FieldPath,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::not_an_object(path.clone(), value))
}

/// Require field `key` to be present in `obj` (the object at `path`).
pub fn require_field<'a>(
    obj: &'a Map<String, Value>,
    path: &FieldPath,
    key: &str,
) -> Result<&'a Value, ValidationError> {
    obj.get(key)
        .ok_or_else(|| ValidationError::missing(path.key(key)))
}

pub fn require_str<'a>(
    obj: &'a Map<String, Value>,
    path: &FieldPath,
    key: &str,
) -> Result<&'a str, ValidationError> {
    let value = require_field(obj, path, key)?;
    value
        .as_str()
        .ok_or_else(|| ValidationError::wrong_type(path.key(key), JsonType::String, value))
}

pub fn require_bool(
    obj: &Map<String, Value>,
    path: &FieldPath,
    key: &str,
) -> Result<bool, ValidationError> {
    let value = require_field(obj, path, key)?;
    value
        .as_bool()
        .ok_or_else(|| ValidationError::wrong_type(path.key(key), JsonType::Boolean, value))
}

pub fn require_array<'a>(
    obj: &'a Map<String, Value>,
    path: &FieldPath,
    key: &str,
) -> Result<&'a [Value], ValidationError> {
    let value = require_field(obj, path, key)?;
    value
        .as_array()
        .map(|arr| arr.as_slice())
        .ok_or_else(|| ValidationError::wrong_type(path.key(key), JsonType::Array, value))
}
