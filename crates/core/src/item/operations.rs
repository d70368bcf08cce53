use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, TryRngCore};
use serde_json::{Map, Value};
use uuid::Builder;

use super::error::ItemError;
use super::types::{Item, ITEM_ID_FIELD};

/// Generates a fresh item identifier.
///
/// Uses a random (v4) UUID drawn from the operating system's random source.
/// If that source is unavailable the current Unix time in milliseconds is
/// used instead.
pub fn generate_item_id() -> String {
    let mut bytes = [0u8; 16];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => Builder::from_random_bytes(bytes).into_uuid().to_string(),
        Err(_) => timestamp_id(Utc::now()),
    }
}

/// Formats a timestamp as a millisecond identifier.
pub fn timestamp_id(now: DateTime<Utc>) -> String {
    now.timestamp_millis().to_string()
}

/// Merges a generated identifier with the caller's fields.
///
/// The identifier is written first and the payload second, so an `id` sent
/// by the caller replaces the generated one.
pub fn merge_item(id: String, payload: Map<String, Value>) -> Item {
    let mut fields = Map::with_capacity(payload.len() + 1);
    fields.insert(ITEM_ID_FIELD.to_string(), Value::String(id));
    fields.extend(payload);
    Item::from_map(fields)
}

/// Builds an item from a raw request body.
///
/// Only JSON objects are accepted.
pub fn item_from_payload(id: String, payload: Value) -> Result<Item, ItemError> {
    match payload {
        Value::Object(fields) => Ok(merge_item(id, fields)),
        _ => Err(ItemError::NotAnObject),
    }
}
