//! PostgreSQL storage backend implementation.
//!
//! This module provides a PostgreSQL-based implementation of
//! `UserRepository` using `sqlx` with a lazily connected pool.

mod error;
mod repository;
mod schema;

pub use repository::PostgresUserRepository;
