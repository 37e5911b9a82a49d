//! JSON Schema documents for the shapes.
//!
//! Each shape describes itself as a JSON Schema object carrying the field
//! types, titles, descriptions and documented examples, so API layers can
//! publish them (e.g. in an OpenAPI document).

use serde_json::{json, Map, Value};

use super::item::{Item, ItemData, ItemId};
use super::item_list::ItemList;
use super::shape::Shape;

pub const SHAPE_NAMES: [&str; 4] = [ItemData::NAME, ItemId::NAME, Item::NAME, ItemList::NAME];

/// Object schema with every listed property required, in listed order.
pub(crate) fn object_schema(title: &str, properties: Vec<(&str, Value)>) -> Value {
    let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let properties: Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();

    json!({
        "title": title,
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

pub(crate) fn string_property(title: &str, description: Option<&str>, example: &str) -> Value {
    let mut property = titled(title, json!({"type": "string", "examples": [example]}));
    if let Some(description) = description {
        property["description"] = json!(description);
    }
    property
}

pub(crate) fn titled(title: &str, mut schema: Value) -> Value {
    schema["title"] = json!(title);
    schema
}

/// Look up a shape's schema by name.
pub fn json_schema_for(shape: &str) -> Option<Value> {
    match shape {
        s if s == ItemData::NAME => Some(ItemData::json_schema()),
        s if s == ItemId::NAME => Some(ItemId::json_schema()),
        s if s == Item::NAME => Some(Item::json_schema()),
        s if s == ItemList::NAME => Some(ItemList::json_schema()),
        _ => None,
    }
}
