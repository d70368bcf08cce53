//! Functional core for stowage.
//!
//! Pure types and functions shared by the HTTP service: item records and
//! their identifier generation, user validation, and the repository traits
//! that the storage backends implement.

pub mod item;
pub mod storage;
pub mod user;
