//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`request_path`] - Classification of public request paths
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the presentation layer
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives `GET /{path}`
//! 2. [`request_path::RequestPath::classify`] tags it as redirect or stats
//! 3. [`crate::application::services::RedirectService`] dispatches to the store
//! 4. Clicks are counted atomically by [`repositories::MappingRepository`]

pub mod entities;
pub mod repositories;
pub mod request_path;
