//! Schema module.
//!
//! Request/response record shapes:
//! - `ItemData` - descriptive fields (`name`)
//! - `ItemId` - identifier (`id`)
//! - `Item` - flat union of `ItemId` and `ItemData`
//! - `ItemList` - one page of items plus a `has_more` flag

pub mod item;
pub mod item_list;
pub mod json_schema;
pub mod shape;

pub use item::*;
pub use item_list::*;
pub use json_schema::{json_schema_for, SHAPE_NAMES};
pub use shape::Shape;
