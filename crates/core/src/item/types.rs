use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the identifier field carried by every item.
pub const ITEM_ID_FIELD: &str = "id";

/// Key attribute written by the key-only put (`POST /items/{id}`).
pub const ITEM_KEY_ATTRIBUTE: &str = "pk";

/// A schema-less item record.
///
/// Items are plain JSON objects. The only field the service cares about is
/// [`ITEM_ID_FIELD`]; everything else is whatever the caller sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    /// Wraps an existing JSON object.
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Creates an item holding only the key attribute.
    pub fn key_only(id: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(ITEM_KEY_ATTRIBUTE.to_string(), Value::String(id.into()));
        Self(fields)
    }

    /// Returns the item identifier when it is a string.
    pub fn id(&self) -> Option<&str> {
        self.0.get(ITEM_ID_FIELD).and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}
