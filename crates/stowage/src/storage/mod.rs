//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `stowage_core::storage`. The cloud backends are selected at
//! compile time via feature flags; the in-memory backend is always built.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): item storage using `aws-sdk-dynamodb`
//! - `postgres` (default): user storage using `sqlx`
//!
//! # Examples
//!
//! Build with both cloud backends (default):
//! ```bash
//! cargo build -p stowage
//! ```
//!
//! Build with everything kept in memory:
//! ```bash
//! cargo build -p stowage --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

// Only reached from tests when both cloud backends are enabled.
#[cfg_attr(all(feature = "dynamodb", feature = "postgres"), allow(dead_code))]
pub mod inmemory;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbItemRepository;

#[cfg_attr(all(feature = "dynamodb", feature = "postgres"), allow(unused_imports))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "postgres")]
pub use postgres::PostgresUserRepository;
