//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short code allocation and stats lookups
//! - [`services::redirect_service::RedirectService`] - Redirect/stats dispatch for public paths

pub mod services;
