//! The `Shape` trait.

use serde_json::Value;

use crate::validation::{FieldPath, ValidationError};

/// A named record shape that can be constructed from untyped JSON.
///
/// Construction is all-or-nothing: either every field is present with the
/// right type and a value comes back, or the first failing field is
/// reported and nothing is built.
pub trait Shape: Sized {
    /// Shape name, as used in schema titles and log lines.
    const NAME: &'static str;

    /// Construct from `value`, reporting failures relative to `path`.
    ///
    /// Used directly when a shape is nested inside another one, so errors
    /// point at the element (e.g. `members.3.name`).
    fn from_value_at(value: &Value, path: &FieldPath) -> Result<Self, ValidationError>;

    /// Construct from a top-level input.
    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_value_at(value, &FieldPath::root())
    }

    /// Instance built from the documented example values.
    fn example() -> Self;

    /// JSON Schema document describing this shape.
    fn json_schema() -> Value;
}

/// Implement `serde::Deserialize` by way of [`Shape::from_value`], so serde
/// users get exactly the same checks and error paths.
macro_rules! impl_deserialize_via_shape {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'de> serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let value =
                        <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                    <$ty as $crate::schema::Shape>::from_value(&value)
                        .map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

pub(crate) use impl_deserialize_via_shape;
