//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::StringRejection},
};
use serde_json::json;

use crate::api::dto::shorten::ShortenResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens the URL sent as the raw request body.
///
/// # Endpoint
///
/// `POST /api/v1/new`
///
/// # Request Body
///
/// Plain text, not JSON:
///
/// ```text
/// curl -X POST http://localhost:8080/api/v1/new \
///   -H 'Content-Type: text/plain; charset=utf-8' \
///   -d "https://www.wikipedia.org"
/// ```
///
/// # Response
///
/// ```json
/// { "code": "aHR0cHM6Ly", "long_url": "https://www.wikipedia.org" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is empty, not UTF-8, or the URL is
/// invalid or unreachable. Returns 500 if the mapping file cannot be read or
/// written.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Result<String, StringRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let body = body?;
    let long_url = body.trim();

    if long_url.is_empty() {
        return Err(AppError::bad_request(
            "Request body must contain a URL",
            json!({}),
        ));
    }

    let code = state.url_service.create(long_url).await?;

    Ok(Json(ShortenResponse {
        code: code.into_inner(),
        long_url: long_url.to_string(),
    }))
}
