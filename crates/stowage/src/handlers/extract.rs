//! Lenient JSON body extractor.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};
use stowage_core::item::ItemError;

use super::error::ApiError;

/// A request body parsed as arbitrary JSON.
///
/// An empty body is read as `{}` and the `Content-Type` header is not
/// required. Malformed JSON is rejected with the same 400 as a
/// non-object body.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;

        parse_body(&bytes).map(Self)
    }
}

fn parse_body(bytes: &[u8]) -> Result<Value, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(error = %e, "Rejected malformed JSON body");
        ApiError::from(ItemError::NotAnObject)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(parse_body(b"").unwrap(), json!({}));
        assert_eq!(parse_body(b"  \n").unwrap(), json!({}));
    }

    #[test]
    fn test_object_body() {
        assert_eq!(parse_body(br#"{"foo":"bar"}"#).unwrap(), json!({"foo": "bar"}));
    }

    #[test]
    fn test_non_object_body_passes_through() {
        assert_eq!(parse_body(b"[1,2]").unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_malformed_body_rejected() {
        match parse_body(b"{not json") {
            Err(ApiError::Validation(message)) => {
                assert_eq!(message, "request body must be a JSON object")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
