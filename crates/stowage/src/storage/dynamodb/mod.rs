//! DynamoDB storage backend implementation.
//!
//! Items live in a single table as native attribute maps converted from
//! their JSON representation, using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbItemRepository;
