//! Redirect and stats dispatch for public request paths.

use std::sync::Arc;

use crate::domain::entities::ShortCode;
use crate::domain::repositories::MappingRepository;
use crate::domain::request_path::RequestPath;
use crate::error::AppError;

/// Data shown on a stats page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub short_code: String,
    pub original_url: String,
    pub clicks: i64,
    pub short_url: String,
}

/// Result of handling a public request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Send the visitor to `location`. The click has already been counted.
    Redirect { location: String },
    /// Render the stats page.
    Stats(StatsView),
    /// No mapping for this path.
    NotFound,
}

/// Stateless dispatcher behind `GET /{code}` and `GET /{code}/stats`.
///
/// Every path is classified by [`RequestPath::classify`] first, so the
/// dispatch below is exhaustive. Malformed codes are answered with
/// [`Outcome::NotFound`] without a store round-trip.
pub struct RedirectService<R: MappingRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: MappingRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
        }
    }

    /// Handles a raw request path such as `/abc123` or `/abc123/stats`.
    ///
    /// Exactly one click is counted per [`Outcome::Redirect`]; stats and
    /// not-found outcomes never modify the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails.
    pub async fn handle(&self, path: &str) -> Result<Outcome, AppError> {
        let request = RequestPath::classify(path);

        let Some(code) = ShortCode::parse(request.code()) else {
            tracing::debug!(path, "Malformed short code");
            return Ok(Outcome::NotFound);
        };

        match request {
            RequestPath::Redirect(_) => self.redirect(&code).await,
            RequestPath::Stats(_) => self.stats(&code).await,
        }
    }

    async fn redirect(&self, code: &ShortCode) -> Result<Outcome, AppError> {
        match self.repository.lookup_and_increment(code).await? {
            Some(visit) => {
                tracing::debug!(
                    code = %code,
                    clicks = visit.clicks_before + 1,
                    "Redirecting"
                );
                Ok(Outcome::Redirect {
                    location: visit.original_url,
                })
            }
            None => {
                tracing::debug!(code = %code, "Short code not found");
                Ok(Outcome::NotFound)
            }
        }
    }

    async fn stats(&self, code: &ShortCode) -> Result<Outcome, AppError> {
        let Some(mapping) = self.repository.lookup_stats(code).await? else {
            tracing::debug!(code = %code, "Short code not found");
            return Ok(Outcome::NotFound);
        };

        Ok(Outcome::Stats(StatsView {
            short_url: mapping.short_code.url(&self.base_url),
            short_code: mapping.short_code.into_inner(),
            original_url: mapping.original_url,
            clicks: mapping.clicks,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Mapping;
    use crate::domain::repositories::{MockMappingRepository, Visit};
    use crate::error::StoreError;

    const BASE: &str = "http://127.0.0.1:8000";

    fn service(mock_repo: MockMappingRepository) -> RedirectService<MockMappingRepository> {
        RedirectService::new(Arc::new(mock_repo), BASE)
    }

    #[tokio::test]
    async fn test_redirect_found() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_lookup_and_increment()
            .withf(|code| code.as_str() == "abc123")
            .times(1)
            .returning(|_| {
                Ok(Some(Visit {
                    original_url: "https://example.com/target".to_string(),
                    clicks_before: 0,
                }))
            });
        mock_repo.expect_lookup_stats().times(0);

        let outcome = service(mock_repo).handle("/abc123").await.unwrap();

        assert_eq!(
            outcome,
            Outcome::Redirect {
                location: "https://example.com/target".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_redirect_not_found() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_lookup_and_increment()
            .times(1)
            .returning(|_| Ok(None));

        let outcome = service(mock_repo).handle("/zzzzzz").await.unwrap();

        assert_eq!(outcome, Outcome::NotFound);
    }

    #[tokio::test]
    async fn test_stats_does_not_increment() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo.expect_lookup_and_increment().times(0);
        mock_repo
            .expect_lookup_stats()
            .withf(|code| code.as_str() == "abc123")
            .times(1)
            .returning(|code| {
                Ok(Some(Mapping::new(
                    code.clone(),
                    "https://example.com".to_string(),
                    3,
                )))
            });

        let outcome = service(mock_repo).handle("/abc123/stats").await.unwrap();

        assert_eq!(
            outcome,
            Outcome::Stats(StatsView {
                short_code: "abc123".to_string(),
                original_url: "https://example.com".to_string(),
                clicks: 3,
                short_url: "http://127.0.0.1:8000/abc123".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_stats_not_found() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_lookup_stats()
            .times(1)
            .returning(|_| Ok(None));

        let outcome = service(mock_repo).handle("/abc123/stats").await.unwrap();

        assert_eq!(outcome, Outcome::NotFound);
    }

    #[tokio::test]
    async fn test_malformed_paths_never_reach_store() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo.expect_lookup_and_increment().times(0);
        mock_repo.expect_lookup_stats().times(0);

        let service = service(mock_repo);

        for path in ["", "/", "//stats", "/stats", "/abc", "/abc12!", "/a/b/c", "/abc123/x"] {
            let outcome = service.handle(path).await.unwrap();
            assert_eq!(outcome, Outcome::NotFound, "path {path:?}");
        }
    }

    #[tokio::test]
    async fn test_storage_error_is_surfaced() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_lookup_and_increment()
            .times(1)
            .returning(|_| Err(StoreError::Io(sqlx::Error::PoolClosed)));

        let result = service(mock_repo).handle("/abc123").await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
