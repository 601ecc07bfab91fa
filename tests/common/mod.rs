#![allow(dead_code)]

use axum::body::{Body, to_bytes};
use axum::http::{Request, Response};
use linkcount::infrastructure::persistence::{self, PoolSettings};
use linkcount::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const BASE_URL: &str = "http://127.0.0.1:8000";

/// A migrated SQLite database in a temporary directory.
///
/// The directory (and the database file) is removed on drop.
pub struct TestDb {
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub async fn test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("urls.db").display());

    // Concurrency tests queue thousands of writers on one file lock.
    let settings = PoolSettings {
        acquire_timeout: Duration::from_secs(120),
        busy_timeout: Duration::from_secs(60),
        ..PoolSettings::default()
    };

    let pool = persistence::connect(&url, &settings).await.unwrap();
    persistence::run_migrations(&pool).await.unwrap();

    TestDb { pool, _dir: dir }
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), BASE_URL)
}

pub async fn create_test_mapping(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, original_url) VALUES (?1, ?2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
