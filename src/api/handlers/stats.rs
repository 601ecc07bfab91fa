//! Handler for JSON link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count for a short code without counting a click.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let mapping = state.link_service.get_stats(&code).await?;

    Ok(Json(StatsResponse {
        short_url: state.link_service.short_url(&mapping.short_code),
        code: mapping.short_code.into_inner(),
        original_url: mapping.original_url,
        clicks: mapping.clicks,
    }))
}
