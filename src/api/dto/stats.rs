//! DTOs for link statistics.

use serde::Serialize;

/// Click statistics for a single short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub short_url: String,
}
