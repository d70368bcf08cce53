//! Application state with repository-based storage.
//!
//! Store handles are built once at startup and shared by every request
//! handler. Which backend serves each collection is selected with feature
//! flags; a collection whose backend feature is disabled is served from
//! memory.

use std::sync::Arc;

use stowage_core::storage::{ItemRepository, UserRepository};

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler. Holds trait objects so handlers never
/// know which store they are talking to.
#[derive(Clone)]
pub struct AppState {
    /// Document store holding items.
    pub items: Arc<dyn ItemRepository>,
    /// Relational store holding users.
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Creates AppState from already constructed repositories.
    pub fn from_repositories(
        items: Arc<dyn ItemRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self { items, users }
    }

    /// Creates AppState with the storage backends enabled at compile time.
    ///
    /// Missing configuration is logged, not fatal: the affected routes fail
    /// per request instead.
    pub async fn new(config: &Config) -> Self {
        config.warn_missing();

        let items = item_repository(config).await;
        let users = user_repository(config).await;

        Self::from_repositories(items, users)
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        let repo = Arc::new(crate::storage::InMemoryRepository::new());
        Self::from_repositories(repo.clone(), repo)
    }
}

#[cfg(feature = "dynamodb")]
async fn item_repository(config: &Config) -> Arc<dyn ItemRepository> {
    let repo = crate::storage::DynamoDbItemRepository::from_config(config).await;
    tracing::info!(table = ?repo.table_name(), "Using DynamoDB item storage");
    Arc::new(repo)
}

#[cfg(not(feature = "dynamodb"))]
async fn item_repository(_config: &Config) -> Arc<dyn ItemRepository> {
    tracing::warn!("DynamoDB support disabled, items are kept in memory");
    Arc::new(crate::storage::InMemoryRepository::new())
}

#[cfg(feature = "postgres")]
async fn user_repository(config: &Config) -> Arc<dyn UserRepository> {
    let repo = crate::storage::PostgresUserRepository::from_config(config);

    if config.database_auto_migrate {
        match repo.migrate().await {
            Ok(()) => tracing::info!("Users table ready"),
            Err(e) => tracing::warn!(error = %e, "Failed to migrate users table"),
        }
    }

    tracing::info!("Using PostgreSQL user storage");
    Arc::new(repo)
}

#[cfg(not(feature = "postgres"))]
async fn user_repository(_config: &Config) -> Arc<dyn UserRepository> {
    tracing::warn!("PostgreSQL support disabled, users are kept in memory");
    Arc::new(crate::storage::InMemoryRepository::new())
}
