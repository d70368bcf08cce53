//! In-memory storage backend.
//!
//! Implements both repository traits on plain collections wrapped in
//! `Arc<RwLock<_>>`. Used by the tests and by builds that disable a cloud
//! backend. Data is lost when the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use stowage::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
