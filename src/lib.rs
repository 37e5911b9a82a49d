//! itemschema-core - Item request/response schemas
//!
//! Record shapes for an item API, with strict field presence and type
//! checking at construction time:
//!
//! ```text
//! Item:      { "id": "xyz123", "name": "Something fun" }
//! ItemList:  { "has_more": false, "members": [ <Item>, ... ] }
//! ```
//!
//! Construction is explicit and all-or-nothing: `Shape::from_value` returns
//! either a fully valid value or a `ValidationError` naming the failing
//! field path and the reason.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `schema` - The shapes, the `Shape` trait and JSON Schema documents
//! - `validation` - `ValidationError`, field paths, typed field access
//! - `codec` - JSON text/bytes decoding and encoding
//! - `logging` - Context prefix for boundary log lines
//!
//! With the `python` feature the crate also builds a PyO3 extension module
//! exposing the validators to Python.

pub mod codec;
pub mod logging;
pub mod schema;
pub mod validation;

#[cfg(feature = "python")]
mod bindings;

pub use codec::{decode, decode_slice, encode, DecodeError};
pub use schema::{Item, ItemData, ItemId, ItemList, Shape};
pub use validation::{FieldPath, ValidationError, ValidationReason};

/// Initialize the crate logger.
///
/// Defaults to `info`, overridable through `RUST_LOG`. Safe to call more
/// than once; only the first call installs the logger.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}
