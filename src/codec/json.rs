//! JSON text boundary.
//!
//! Parses request bodies into shapes and renders shapes back to their wire
//! form. Parsing and validation are separate failure modes: malformed text
//! never reaches the shape constructors.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::logging::structured::LogContext;
use crate::schema::Shape;
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DecodeError {
    /// The validation failure, if the payload was well-formed JSON.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            DecodeError::Validation(err) => Some(err),
            DecodeError::Json(_) => None,
        }
    }
}

/// Decode a shape from JSON text.
pub fn decode<T: Shape>(payload: &str) -> Result<T, DecodeError> {
    decode_with(&LogContext::new(T::NAME), payload)
}

/// Decode a shape from JSON bytes.
pub fn decode_slice<T: Shape>(payload: &[u8]) -> Result<T, DecodeError> {
    let ctx = LogContext::new(T::NAME);
    let value: Value = serde_json::from_slice(payload).map_err(|e| parse_failed(&ctx, e))?;
    construct(&ctx, &value)
}

/// Decode a shape from JSON text, logging under `ctx`.
pub fn decode_with<T: Shape>(ctx: &LogContext, payload: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(payload).map_err(|e| parse_failed(ctx, e))?;
    construct(ctx, &value)
}

/// Render a shape as compact JSON text.
pub fn encode<T: Serialize>(value: &T) -> Result<String, DecodeError> {
    Ok(serde_json::to_string(value)?)
}

fn parse_failed(ctx: &LogContext, err: serde_json::Error) -> DecodeError {
    log::warn!("{} DECODE_PARSE_FAILED error={}", ctx, err);
    DecodeError::Json(err)
}

fn construct<T: Shape>(ctx: &LogContext, value: &Value) -> Result<T, DecodeError> {
    match T::from_value(value) {
        Ok(shape) => {
            log::debug!("{} DECODE_OK", ctx);
            Ok(shape)
        }
        Err(err) => {
            log::warn!(
                "{} DECODE_REJECTED path={} reason={}",
                ctx,
                err.path,
                err.reason
            );
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Item, ItemData, ItemId, ItemList};

    #[test]
    fn test_decode_item() {
        let item: Item = decode(r#"{"id": "xyz123", "name": "Something fun"}"#).unwrap();
        assert_eq!(item, Item::new("xyz123", "Something fun"));
    }

    #[test]
    fn test_decode_item_list() {
        let list: ItemList =
            decode(r#"{"has_more": true, "members": [{"id":"a","name":"A"}]}"#).unwrap();
        assert_eq!(list, ItemList::new(true, vec![Item::new("a", "A")]));
    }

    #[test]
    fn test_decode_slice() {
        let id: ItemId = decode_slice(br#"{"id": "x"}"#).unwrap();
        assert_eq!(id, ItemId::new("x"));
    }

    #[test]
    fn test_invalid_json_is_not_a_validation_error() {
        let err = decode::<Item>("invalid json{").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
        assert!(err.validation().is_none());
        assert!(err.to_string().starts_with("invalid JSON:"));
    }

    #[test]
    fn test_validation_error_passes_through() {
        let err = decode::<ItemData>(r#"{"name": 5}"#).unwrap_err();
        let validation = err.validation().unwrap();
        assert_eq!(validation.path.to_string(), "name");
        assert_eq!(err.to_string(), "name: expected string, found number");
    }

    #[test]
    fn test_decode_with_context() {
        let ctx = LogContext::new(ItemList::NAME).with_source("test");
        let err = decode_with::<ItemList>(&ctx, r#"{"has_more": null, "members": []}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "has_more: expected boolean, found null");
    }

    #[test]
    fn test_encode_wire_form() {
        assert_eq!(
            encode(&Item::example()).unwrap(),
            r#"{"id":"xyz123","name":"Something fun"}"#
        );
        assert_eq!(
            encode(&ItemList::new(false, vec![])).unwrap(),
            r#"{"has_more":false,"members":[]}"#
        );
    }

    #[test]
    fn test_encode_then_decode() {
        let list = ItemList::new(
            true,
            vec![Item::new("b", "second"), Item::new("a", "first")],
        );
        let decoded: ItemList = decode(&encode(&list).unwrap()).unwrap();
        assert_eq!(decoded, list);
    }
}
