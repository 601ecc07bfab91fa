//! Shared application state injected into all handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService};
use crate::infrastructure::persistence::SqliteMappingRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteMappingRepository>>,
    pub redirect_service: Arc<RedirectService<SqliteMappingRepository>>,
}

impl AppState {
    /// Wires repositories and services over a single shared pool.
    pub fn new(pool: Arc<SqlitePool>, base_url: &str) -> Self {
        let repository = Arc::new(SqliteMappingRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(repository.clone(), base_url)),
            redirect_service: Arc::new(RedirectService::new(repository, base_url)),
        }
    }
}
