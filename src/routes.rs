//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`        - Short link redirect (counts a click)
//! - `GET  /{code}/stats`  - HTML stats page (read-only)
//! - `/api/*`              - JSON API: shorten, stats, health
//!
//! Everything outside `/api` goes through a single dispatcher, so the
//! redirect/stats decision is made in one place from the raw path.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::dispatch_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes and per-request middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::routes::api_routes())
        .route("/", get(dispatch_handler))
        .route("/{*path}", get(dispatch_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/Xy9z0Q/` behaves like
/// `/Xy9z0Q`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
