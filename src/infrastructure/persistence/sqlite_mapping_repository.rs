//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Mapping, ShortCode};
use crate::domain::repositories::{MappingRepository, Visit};
use crate::error::StoreError;

#[derive(FromRow)]
struct StatsRow {
    original_url: String,
    clicks: i64,
}

#[derive(FromRow)]
struct VisitRow {
    original_url: String,
    clicks_before: i64,
}

/// SQLite repository for the `urls` table.
///
/// Uniqueness rests on the `short_code` primary key and every mutation is a
/// single statement, so concurrent callers on any number of pooled
/// connections (or processes sharing the file) cannot lose updates.
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn exists(&self, code: &ShortCode) -> Result<bool, StoreError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM urls WHERE short_code = ?1")
            .bind(code.as_str())
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(found.is_some())
    }

    async fn insert_unique(&self, code: &ShortCode, original_url: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO urls (short_code, original_url)
            VALUES (?1, ?2)
            ON CONFLICT (short_code) DO NOTHING
            "#,
        )
        .bind(code.as_str())
        .bind(original_url)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::AlreadyExists);
        }

        Ok(())
    }

    async fn lookup_and_increment(&self, code: &ShortCode) -> Result<Option<Visit>, StoreError> {
        let row = sqlx::query_as::<_, VisitRow>(
            r#"
            UPDATE urls
            SET clicks = clicks + 1
            WHERE short_code = ?1
            RETURNING original_url, clicks - 1 AS clicks_before
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| Visit {
            original_url: r.original_url,
            clicks_before: r.clicks_before,
        }))
    }

    async fn lookup_stats(&self, code: &ShortCode) -> Result<Option<Mapping>, StoreError> {
        let row = sqlx::query_as::<_, StatsRow>(
            "SELECT original_url, clicks FROM urls WHERE short_code = ?1",
        )
        .bind(code.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| Mapping::new(code.clone(), r.original_url, r.clicks)))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
