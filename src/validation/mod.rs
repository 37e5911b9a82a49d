//! Field validation module.
//!
//! Provides the building blocks shape constructors are made of:
//! - `ValidationError` with the failing field path and reason
//! - Dot-notation field paths that resolve back into the input
//! - Strict typed accessors over JSON objects

pub mod error;
pub mod fields;
pub mod path;

pub use error::*;
pub use fields::*;
pub use path::*;
