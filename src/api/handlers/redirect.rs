//! Handler for short code or URL redirect.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::api::dto::shorten::ResolveParams;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects to the URL behind a short code, or to a reachable URL directly.
///
/// # Endpoint
///
/// `GET /api/v1/url?url=<code-or-url>`
///
/// # Request Flow
///
/// 1. Load the mapping file
/// 2. If `url` is a stored code, redirect to its target
/// 3. Otherwise check that `url` itself answers `200 OK` and redirect to it
///
/// ```text
/// /api/v1/url?url=aHR0cHM6Ly                              -> stored target
/// /api/v1/url?url=https%3A%2F%2Fwww.wikipedia.org         -> passthrough
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the parameter is missing, or if the key is
/// neither stored nor a reachable URL. When `url` is repeated, the first
/// value is used.
pub async fn resolve_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(pairs) = query?;
    let key = ResolveParams::from_pairs(pairs)
        .url
        .filter(|k| !k.is_empty())
        .ok_or_else(|| AppError::bad_request("Missing 'url' query parameter", json!({})))?;

    debug!("Resolving {}", key);

    let target = state.url_service.resolve(&key).await?.into_target();

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]))
}
