//! # linkcount
//!
//! A small URL shortener with per-code click counting, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity, repository trait, path classification
//! - **Application Layer** ([`application`]) - Code allocation and redirect/stats dispatch
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool and repository
//! - **API Layer** ([`api`]) - Public dispatcher, JSON API, middleware
//! - **Web Layer** ([`web`]) - HTML stats page
//!
//! ## Guarantees
//!
//! - Short codes are six characters from `[A-Za-z0-9]` and unique; the
//!   store's primary key decides, not a pre-check
//! - Every successful redirect adds exactly one click, atomically
//! - Stats views never modify the counter
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"
//! export BASE_URL="http://127.0.0.1:8000"
//!
//! # Start the redirect server
//! cargo run
//!
//! # Create a short code from another shell
//! cargo run --bin admin -- shorten https://example.com/very/long/path
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{AppError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, Outcome, RedirectService, StatsView};
    pub use crate::domain::entities::{Mapping, ShortCode};
    pub use crate::domain::repositories::{MappingRepository, Visit};
    pub use crate::error::{AppError, StoreError};
    pub use crate::infrastructure::persistence::SqliteMappingRepository;
    pub use crate::state::AppState;
}
