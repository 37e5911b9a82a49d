//! Item shapes.
//!
//! `Item` is the field-set union of `ItemId` and `ItemData`, held as one
//! flat record. The part shapes convert into and out of it.

use serde::Serialize;
use serde_json::Value;

use crate::validation::{require_object, require_str, FieldPath, ValidationError};

use super::json_schema::{object_schema, string_property};
use super::shape::{impl_deserialize_via_shape, Shape};

pub const ITEM_ID_DESCRIPTION: &str = "identifier of item";
pub const ITEM_ID_EXAMPLE: &str = "xyz123";
pub const ITEM_NAME_EXAMPLE: &str = "Something fun";

/// Descriptive data of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ItemData {
    pub name: String,
}

impl ItemData {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Shape for ItemData {
    const NAME: &'static str = "ItemData";

    fn from_value_at(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = require_object(value, path)?;
        let name = require_str(obj, path, "name")?;
        Ok(Self::new(name))
    }

    fn example() -> Self {
        Self::new(ITEM_NAME_EXAMPLE)
    }

    fn json_schema() -> Value {
        object_schema(
            Self::NAME,
            vec![("name", string_property("Name", None, ITEM_NAME_EXAMPLE))],
        )
    }
}

/// Identifier of an item. Any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ItemId {
    pub id: String,
}

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Shape for ItemId {
    const NAME: &'static str = "ItemId";

    fn from_value_at(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        let obj = require_object(value, path)?;
        let id = require_str(obj, path, "id")?;
        Ok(Self::new(id))
    }

    fn example() -> Self {
        Self::new(ITEM_ID_EXAMPLE)
    }

    fn json_schema() -> Value {
        object_schema(
            Self::NAME,
            vec![(
                "id",
                string_property("Id", Some(ITEM_ID_DESCRIPTION), ITEM_ID_EXAMPLE),
            )],
        )
    }
}

/// An item: `id` plus `name`. Serializes as `{"id": ..., "name": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    pub id: String,
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn from_parts(id: ItemId, data: ItemData) -> Self {
        Self {
            id: id.id,
            name: data.name,
        }
    }

    pub fn into_parts(self) -> (ItemId, ItemData) {
        (ItemId { id: self.id }, ItemData { name: self.name })
    }

    pub fn item_id(&self) -> ItemId {
        ItemId::new(self.id.clone())
    }

    pub fn item_data(&self) -> ItemData {
        ItemData::new(self.name.clone())
    }
}

impl From<(ItemId, ItemData)> for Item {
    fn from((id, data): (ItemId, ItemData)) -> Self {
        Self::from_parts(id, data)
    }
}

impl Shape for Item {
    const NAME: &'static str = "Item";

    fn from_value_at(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        // Same checks as the two part shapes, `id` first.
        let id = ItemId::from_value_at(value, path)?;
        let data = ItemData::from_value_at(value, path)?;
        Ok(Self::from_parts(id, data))
    }

    fn example() -> Self {
        Self::from_parts(ItemId::example(), ItemData::example())
    }

    fn json_schema() -> Value {
        object_schema(
            Self::NAME,
            vec![
                (
                    "id",
                    string_property("Id", Some(ITEM_ID_DESCRIPTION), ITEM_ID_EXAMPLE),
                ),
                ("name", string_property("Name", None, ITEM_NAME_EXAMPLE)),
            ],
        )
    }
}

impl_deserialize_via_shape!(ItemData, ItemId, Item);
