//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use stowage_core::item::{Item, ITEM_ID_FIELD, ITEM_KEY_ATTRIBUTE};
use stowage_core::storage::{ItemRepository, Result, UserRepository};
use stowage_core::user::{NewUser, User};

/// In-memory storage backend.
///
/// Items keep insertion order and are keyed by the `(field, value)` pair of
/// `id`, or of `pk` for key-only records; a put with an existing key
/// replaces the record. An `id` and a `pk` with the same value are
/// different keys. User ids are
/// assigned sequentially starting at 1.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    items: Arc<RwLock<Vec<Item>>>,
    users: Arc<RwLock<UserTable>>,
}

#[derive(Debug)]
struct UserTable {
    rows: Vec<User>,
    next_id: i64,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            users: Arc::new(RwLock::new(UserTable {
                rows: Vec::new(),
                next_id: 1,
            })),
        }
    }
}

fn item_key(item: &Item) -> Option<(&'static str, &Value)> {
    [ITEM_ID_FIELD, ITEM_KEY_ATTRIBUTE]
        .into_iter()
        .find_map(|field| item.get(field).map(|value| (field, value)))
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn scan_items(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.clone())
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        let key = item_key(item);

        match items
            .iter_mut()
            .find(|existing| key.is_some() && item_key(existing) == key)
        {
            Some(existing) => *existing = item.clone(),
            None => items.push(item.clone()),
        }
        Ok(())
    }

    async fn put_key(&self, id: &str) -> Result<()> {
        self.put_item(&Item::key_only(id)).await
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn list_users(&self) -> Result<Vec<User>> {
        let table = self.users.read().await;
        let mut rows = table.rows.clone();
        rows.sort_by_key(|u| u.id);
        Ok(rows)
    }

    async fn insert_user(&self, user: &NewUser) -> Result<User> {
        let mut table = self.users.write().await;
        let stored = user.clone().into_user(table.next_id);
        table.next_id += 1;
        table.rows.push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        serde_json::from_value(value).unwrap()
    }

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_scan_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.scan_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_put_and_scan_preserves_order() {
        let repo = InMemoryRepository::new();
        repo.put_item(&item(json!({"id": "a"}))).await.unwrap();
        repo.put_item(&item(json!({"id": "b", "foo": "bar"})))
            .await
            .unwrap();

        let items = repo.scan_items().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id(), Some("a"));
        assert_eq!(items[1].get("foo"), Some(&json!("bar")));
    }

    #[tokio::test]
    async fn test_put_same_id_replaces() {
        let repo = InMemoryRepository::new();
        repo.put_item(&item(json!({"id": "a", "v": 1}))).await.unwrap();
        repo.put_item(&item(json!({"id": "a", "v": 2}))).await.unwrap();

        let items = repo.scan_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].get("v"), Some(&json!(2)));
    }

    #[tokio::test]
    async fn test_put_key_stores_key_only_record() {
        let repo = InMemoryRepository::new();
        repo.put_key("k1").await.unwrap();
        repo.put_key("k1").await.unwrap();

        let items = repo.scan_items().await.unwrap();
        assert_eq!(items, vec![Item::key_only("k1")]);
    }

    #[tokio::test]
    async fn test_key_only_record_does_not_replace_item_with_same_id() {
        let repo = InMemoryRepository::new();
        repo.put_item(&item(json!({"id": "x", "foo": "bar"})))
            .await
            .unwrap();
        repo.put_key("x").await.unwrap();

        let items = repo.scan_items().await.unwrap();
        assert_eq!(
            items,
            vec![item(json!({"id": "x", "foo": "bar"})), Item::key_only("x")]
        );
    }

    #[tokio::test]
    async fn test_insert_user_assigns_sequential_ids() {
        let repo = InMemoryRepository::new();
        let first = repo.insert_user(&new_user("A", "a@x.com")).await.unwrap();
        let second = repo.insert_user(&new_user("B", "b@x.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let users = repo.list_users().await.unwrap();
        assert_eq!(users, vec![first, second]);
    }
}
