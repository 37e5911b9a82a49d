//! Validation errors.
//!
//! A shape is either fully valid or not constructed at all. The one error
//! kind carries where the input failed and why.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use super::path::FieldPath;

/// JSON type names used in error reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("field required")]
    Missing,
    #[error("expected {expected}, found {found}")]
    WrongType { expected: JsonType, found: JsonType },
    #[error("expected object, found {found}")]
    NotAnObject { found: JsonType },
}

/// Input failed a shape's field presence or type requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {reason}")]
pub struct ValidationError {
    pub path: FieldPath,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn missing(path: FieldPath) -> Self {
        Self {
            path,
            reason: ValidationReason::Missing,
        }
    }

    pub fn wrong_type(path: FieldPath, expected: JsonType, found: &Value) -> Self {
        Self {
            path,
            reason: ValidationReason::WrongType {
                expected,
                found: JsonType::of(found),
            },
        }
    }

    pub fn not_an_object(path: FieldPath, found: &Value) -> Self {
        Self {
            path,
            reason: ValidationReason::NotAnObject {
                found: JsonType::of(found),
            },
        }
    }

    pub fn is_missing(&self) -> bool {
        self.reason == ValidationReason::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_type_of() {
        assert_eq!(JsonType::of(&json!(null)), JsonType::Null);
        assert_eq!(JsonType::of(&json!(false)), JsonType::Boolean);
        assert_eq!(JsonType::of(&json!(1.5)), JsonType::Number);
        assert_eq!(JsonType::of(&json!("x")), JsonType::String);
        assert_eq!(JsonType::of(&json!([])), JsonType::Array);
        assert_eq!(JsonType::of(&json!({})), JsonType::Object);
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::missing(FieldPath::root().key("name"));
        assert_eq!(err.to_string(), "name: field required");
        assert!(err.is_missing());

        let err = ValidationError::wrong_type(
            FieldPath::root().key("members").index(0).key("id"),
            JsonType::String,
            &json!(42),
        );
        assert_eq!(
            err.to_string(),
            "members.0.id: expected string, found number"
        );
        assert!(!err.is_missing());

        let err = ValidationError::not_an_object(FieldPath::root(), &json!([1]));
        assert_eq!(err.to_string(), "<root>: expected object, found array");
    }
}
