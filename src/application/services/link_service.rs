//! Short code allocation and read-only lookups.

use std::sync::Arc;

use crate::domain::entities::{Mapping, ShortCode};
use crate::domain::repositories::MappingRepository;
use crate::error::{AppError, StoreError};
use crate::utils::code_generator::generate_code;
use serde_json::json;

/// Service for creating short codes and reading their statistics.
///
/// Codes are allocated optimistically: generate, try to insert, and on a
/// collision generate again. The store's atomic insert is the only
/// uniqueness check, so concurrent callers can never be handed the same code.
pub struct LinkService<R: MappingRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: MappingRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix short URLs are built from, e.g.
    /// `http://127.0.0.1:8000`.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
        }
    }

    /// Allocates a fresh short code for `original_url` and stores it.
    ///
    /// The URL is stored verbatim. Collisions are retried until an unused
    /// code is found; with a 62^6 code space the expected number of
    /// attempts is one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or whitespace.
    /// Returns [`AppError::Internal`] as soon as the store fails.
    pub async fn create_short_code(&self, original_url: &str) -> Result<ShortCode, AppError> {
        if original_url.trim().is_empty() {
            return Err(AppError::bad_request(
                "URL is required",
                json!({ "field": "url" }),
            ));
        }

        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let code = generate_code();

            match self.repository.insert_unique(&code, original_url).await {
                Ok(()) => {
                    tracing::info!(code = %code, attempts, "Short code created");
                    return Ok(code);
                }
                Err(StoreError::AlreadyExists) => {
                    tracing::debug!(code = %code, "Short code collision, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Looks up statistics for a code without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_stats(&self, code: &str) -> Result<Mapping, AppError> {
        let not_found = || AppError::not_found("URL not found", json!({ "code": code }));

        let short_code = ShortCode::parse(code).ok_or_else(not_found)?;

        self.repository
            .lookup_stats(&short_code)
            .await?
            .ok_or_else(not_found)
    }

    /// Counts all stored mappings.
    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.repository.count().await?)
    }

    /// Builds the full short URL, `<base>/<code>`.
    pub fn short_url(&self, code: &ShortCode) -> String {
        code.url(&self.base_url)
    }

    /// Builds the stats page URL, `<base>/<code>/stats`.
    pub fn stats_url(&self, code: &ShortCode) -> String {
        format!("{}/stats", self.short_url(code))
    }
}
