use async_trait::async_trait;

use crate::item::Item;
use crate::user::{NewUser, User};

use super::Result;

/// Repository for the document store holding items.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Returns every item in the collection, without filtering.
    async fn scan_items(&self) -> Result<Vec<Item>>;

    /// Writes an item, replacing any record with the same key.
    async fn put_item(&self, item: &Item) -> Result<()>;

    /// Writes a record holding only the key attribute.
    async fn put_key(&self, id: &str) -> Result<()>;
}

/// Repository for the relational store holding users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users ordered by ascending identifier.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Inserts a user and returns the stored row with its assigned identifier.
    async fn insert_user(&self, user: &NewUser) -> Result<User>;
}
