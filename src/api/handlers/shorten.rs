//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "Xy9z0Q",
///   "short_url": "http://127.0.0.1:8000/Xy9z0Q",
///   "stats_url": "http://127.0.0.1:8000/Xy9z0Q/stats",
///   "original_url": "https://example.com/very/long/path"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing, empty or whitespace.
/// Returns 500 Internal Server Error if the store fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let code = state.link_service.create_short_code(&payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: state.link_service.short_url(&code),
        stats_url: state.link_service.stats_url(&code),
        code: code.into_inner(),
        original_url: payload.url,
    }))
}
