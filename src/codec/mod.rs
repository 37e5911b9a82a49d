//! Wire codec module.
//!
//! Decodes shapes from JSON request bodies and encodes them for responses.

pub mod json;

pub use json::*;
