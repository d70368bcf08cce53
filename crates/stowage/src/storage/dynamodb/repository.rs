//! DynamoDB repository implementation.
//!
//! Implements `ItemRepository` from `stowage_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_config::{meta::region::RegionProviderChain, BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;

use stowage_core::item::Item;
use stowage_core::storage::{ItemRepository, RepositoryError, Result};

use super::conversions::{attributes_to_item, item_to_attributes};
use super::error::{map_put_item_error, map_scan_error};
use crate::config::{Config, DEFAULT_AWS_REGION};

/// DynamoDB-based item repository.
///
/// The table name is optional so the service can start without it; every
/// operation then fails with [`RepositoryError::NotConfigured`].
pub struct DynamoDbItemRepository {
    client: Client,
    table_name: Option<String>,
}

impl DynamoDbItemRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: Option<String>) -> Self {
        Self { client, table_name }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain. The region comes from
    /// `AWS_REGION`, then the SDK provider chain, then `ap-southeast-1`.
    ///
    /// There is no default table name. Without `ITEMS_TABLE_NAME` every
    /// operation, including the key-only put behind `POST /items/{id}`,
    /// fails with [`RepositoryError::NotConfigured`] rather than writing to
    /// a built-in `fargate-items` table.
    pub async fn from_config(config: &Config) -> Self {
        let region = RegionProviderChain::first_try(config.aws_region.clone().map(Region::new))
            .or_default_provider()
            .or_else(Region::new(DEFAULT_AWS_REGION));

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);
        if let Some(endpoint) = &config.dynamodb_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.items_table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    fn table(&self) -> Result<&str> {
        self.table_name()
            .ok_or(RepositoryError::NotConfigured("ITEMS_TABLE_NAME"))
    }
}

#[async_trait]
impl ItemRepository for DynamoDbItemRepository {
    async fn scan_items(&self) -> Result<Vec<Item>> {
        let table = self.table()?;
        let mut items = Vec::new();
        let mut start_key = None;

        // Follow LastEvaluatedKey so callers see the whole table.
        loop {
            let result = self
                .client
                .scan()
                .table_name(table)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            for attributes in result.items.unwrap_or_default() {
                items.push(attributes_to_item(&attributes)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(items)
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        let table = self.table()?;

        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn put_key(&self, id: &str) -> Result<()> {
        self.put_item(&Item::key_only(id)).await
    }
}
