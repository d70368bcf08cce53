//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between JSON documents and DynamoDB
//! AttributeValue maps. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{Map, Number, Value};
use stowage_core::item::Item;
use stowage_core::storage::RepositoryError;

// ============================================================================
// JSON -> DynamoDB
// ============================================================================

/// Convert a JSON value to a DynamoDB attribute.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(fields) => AttributeValue::M(object_to_attributes(fields)),
    }
}

fn object_to_attributes(fields: &Map<String, Value>) -> HashMap<String, AttributeValue> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), json_to_attribute(value)))
        .collect()
}

/// Convert an Item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    object_to_attributes(item.as_map())
}

// ============================================================================
// DynamoDB -> JSON
// ============================================================================

/// Convert a DynamoDB attribute to a JSON value.
///
/// Binary attributes are returned as base64 strings and sets as arrays.
pub fn attribute_to_json(attribute: &AttributeValue) -> Result<Value, RepositoryError> {
    let value = match attribute {
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::N(n) => Value::Number(parse_number(n)?),
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::B(blob) => Value::String(encode_blob(blob)),
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(attribute_to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(fields) => Value::Object(attributes_to_object(fields)?),
        AttributeValue::Ss(values) => {
            Value::Array(values.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|n| parse_number(n).map(Value::Number))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::Bs(blobs) => Value::Array(
            blobs
                .iter()
                .map(|blob| Value::String(encode_blob(blob)))
                .collect(),
        ),
        other => {
            return Err(RepositoryError::Serialization(format!(
                "Unsupported attribute type: {:?}",
                other
            )))
        }
    };

    Ok(value)
}

fn attributes_to_object(
    fields: &HashMap<String, AttributeValue>,
) -> Result<Map<String, Value>, RepositoryError> {
    fields
        .iter()
        .map(|(key, attribute)| Ok((key.clone(), attribute_to_json(attribute)?)))
        .collect()
}

/// Convert a DynamoDB item to an Item.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, RepositoryError> {
    attributes_to_object(attributes).map(Item::from_map)
}

fn parse_number(raw: &str) -> Result<Number, RepositoryError> {
    raw.parse::<Number>()
        .map_err(|e| RepositoryError::Serialization(format!("Invalid number '{}': {}", raw, e)))
}

fn encode_blob(blob: &Blob) -> String {
    STANDARD.encode(blob.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_item() -> Item {
        serde_json::from_value(json!({
            "id": "550e8400-e29b-41d4-a716-446655440001",
            "name": "widget",
            "price": 12.5,
            "stock": 3,
            "active": true,
            "notes": null,
            "tags": ["a", "b"],
            "dims": {"w": 2, "h": 4}
        }))
        .unwrap()
    }

    #[test]
    fn test_item_attribute_shapes() {
        let attributes = item_to_attributes(&sample_item());

        assert_eq!(
            attributes.get("id").unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(attributes.get("price").unwrap().as_n().unwrap(), "12.5");
        assert_eq!(attributes.get("stock").unwrap().as_n().unwrap(), "3");
        assert!(*attributes.get("active").unwrap().as_bool().unwrap());
        assert!(attributes.get("notes").unwrap().is_null());
        assert_eq!(attributes.get("tags").unwrap().as_l().unwrap().len(), 2);
        assert!(attributes.get("dims").unwrap().as_m().unwrap().contains_key("w"));
    }

    #[test]
    fn test_item_survives_storage() {
        let item = sample_item();
        let parsed = attributes_to_item(&item_to_attributes(&item)).unwrap();

        assert_eq!(parsed, item);
    }

    #[test]
    fn test_string_set_becomes_array() {
        let attribute = AttributeValue::Ss(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(attribute_to_json(&attribute).unwrap(), json!(["x", "y"]));
    }

    #[test]
    fn test_number_set_becomes_array() {
        let attribute = AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]);
        assert_eq!(attribute_to_json(&attribute).unwrap(), json!([1, 2.5]));
    }

    #[test]
    fn test_binary_becomes_base64() {
        let attribute = AttributeValue::B(Blob::new(b"hi".to_vec()));
        assert_eq!(attribute_to_json(&attribute).unwrap(), json!("aGk="));
    }

    #[test]
    fn test_invalid_number_is_error() {
        let attribute = AttributeValue::N("not-a-number".to_string());
        assert!(matches!(
            attribute_to_json(&attribute),
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[test]
    fn test_key_only_item() {
        let attributes = item_to_attributes(&Item::key_only("abc"));

        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes.get("pk").unwrap().as_s().unwrap(), "abc");
    }
}
