//! Public redirect and stats handler.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::application::services::Outcome;
use crate::state::AppState;
use crate::web::StatsPage;

const NOT_FOUND_BODY: &str = "URL not found.";
const INTERNAL_ERROR_BODY: &str = "Internal server error.";

/// Serves every public `GET` path.
///
/// # Endpoints
///
/// - `GET /{code}` - 302 redirect to the original URL, counting one click
/// - `GET /{code}/stats` - HTML page with URL, click count and short URL
///
/// # Responses
///
/// - **302 Found** with `Location` on a known code
/// - **200 OK** with the stats page on a known code
/// - **404 Not Found**, `text/plain` body `URL not found.`, for unknown or
///   malformed codes (including `/` and `//stats`)
/// - **500 Internal Server Error**, `text/plain`, when the store fails
///
/// Control characters in a stored URL are percent-encoded in `Location`, so
/// every counted click is answered with a redirect.
pub async fn dispatch_handler(State(state): State<AppState>, uri: Uri) -> Response {
    match state.redirect_service.handle(uri.path()).await {
        Ok(Outcome::Redirect { location }) => found(&location),
        Ok(Outcome::Stats(view)) => StatsPage::from(view).into_response(),
        Ok(Outcome::NotFound) => plain(StatusCode::NOT_FOUND, NOT_FOUND_BODY),
        Err(e) => {
            error!("Failed to handle {}: {}", uri.path(), e);
            plain(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
        }
    }
}

/// Builds a `302 Found` response.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location_value(location))]).into_response()
}

/// Converts a stored URL into a `Location` value.
///
/// Stored URLs are never validated, so control characters (other than tab)
/// are percent-encoded; every other byte is already legal in a header value.
fn location_value(url: &str) -> HeaderValue {
    let mut encoded = String::with_capacity(url.len());
    for ch in url.chars() {
        if ch.is_ascii_control() && ch != '\t' {
            encoded.push_str(&urlencoding::encode_binary(&[ch as u8]));
        } else {
            encoded.push(ch);
        }
    }

    HeaderValue::from_str(&encoded)
        .unwrap_or_else(|_| unreachable!("encoded location {encoded:?} is a valid header value"))
}

fn plain(status: StatusCode, body: &'static str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}
