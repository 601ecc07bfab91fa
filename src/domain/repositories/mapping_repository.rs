//! Repository trait for short code mappings.

use crate::domain::entities::{Mapping, ShortCode};
use crate::error::StoreError;
use async_trait::async_trait;

/// Result of a successful redirect lookup.
///
/// `clicks_before` is the counter value prior to this visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub original_url: String,
    pub clicks_before: i64,
}

/// Durable, concurrency-safe storage of [`Mapping`]s.
///
/// All mutual exclusion lives inside the implementation. Callers never
/// combine a read and a write themselves: uniqueness is decided by
/// [`insert_unique`](Self::insert_unique) and counting by
/// [`lookup_and_increment`](Self::lookup_and_increment), each a single atomic
/// operation.
///
/// Every method may fail with [`StoreError::Io`]; implementations surface it
/// as-is and never retry on their own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Returns `true` if a mapping for `code` is present. No side effects.
    async fn exists(&self, code: &ShortCode) -> Result<bool, StoreError>;

    /// Inserts a new mapping with zero clicks, only if `code` is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if the code is already taken,
    /// including when a concurrent insert claimed it first. An existing
    /// mapping is never overwritten.
    async fn insert_unique(&self, code: &ShortCode, original_url: &str) -> Result<(), StoreError>;

    /// Atomically adds one click and returns the destination together with
    /// the previous click count.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Visit))` if found
    /// - `Ok(None)` if not found (nothing is modified)
    async fn lookup_and_increment(&self, code: &ShortCode) -> Result<Option<Visit>, StoreError>;

    /// Reads the mapping without modifying it.
    async fn lookup_stats(&self, code: &ShortCode) -> Result<Option<Mapping>, StoreError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, StoreError>;
}
