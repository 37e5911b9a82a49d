//! Item list shape.
//!
//! One page of a paginated item collection. `has_more` only says whether
//! further pages exist; how to fetch them is not part of this shape.

use serde::Serialize;
use serde_json::{json, Value};

use crate::validation::{require_array, require_bool, require_object, FieldPath, ValidationError};

use super::item::Item;
use super::json_schema::{object_schema, titled};
use super::shape::{impl_deserialize_via_shape, Shape};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemList {
    pub has_more: bool,
    /// Page order is preserved; duplicate ids are allowed.
    pub members: Vec<Item>,
}

impl ItemList {
    pub fn new(has_more: bool, members: Vec<Item>) -> Self {
        Self { has_more, members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Shape for ItemList {
    const NAME: &'static str = "ItemList";

    fn from_value_at(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = require_object(value, path)?;
        let has_more = require_bool(obj, path, "has_more")?;
        let elements = require_array(obj, path, "members")?;

        let members_path = path.key("members");
        let members = elements
            .iter()
            .enumerate()
            .map(|(i, element)| Item::from_value_at(element, &members_path.index(i)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { has_more, members })
    }

    fn example() -> Self {
        Self::new(false, vec![Item::example()])
    }

    fn json_schema() -> Value {
        let mut schema = object_schema(
            Self::NAME,
            vec![
                ("has_more", titled("Has More", json!({"type": "boolean"}))),
                (
                    "members",
                    titled(
                        "Members",
                        json!({"type": "array", "items": {"$ref": "#/$defs/Item"}}),
                    ),
                ),
            ],
        );
        schema["$defs"] = json!({ "Item": Item::json_schema() });
        schema
    }
}

impl_deserialize_via_shape!(ItemList);
