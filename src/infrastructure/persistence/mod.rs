//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`SqliteMappingRepository`] - Short code storage, lookup and click counting
//!
//! Connection setup and migrations live in [`pool`].

pub mod pool;
pub mod sqlite_mapping_repository;

pub use pool::{PoolSettings, connect, run_migrations};
pub use sqlite_mapping_repository::SqliteMappingRepository;
