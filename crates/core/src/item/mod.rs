mod error;
mod operations;
mod types;

pub use error::ItemError;
pub use operations::{generate_item_id, item_from_payload, merge_item, timestamp_id};
pub use types::{Item, ITEM_ID_FIELD, ITEM_KEY_ATTRIBUTE};
