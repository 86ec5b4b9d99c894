//! API route configuration.

use crate::api::handlers::{resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned API routes.
///
/// # Endpoints
///
/// - `POST /new`           - Shorten the URL in the raw request body
/// - `GET  /url?url=...`   - Redirect a short code or a reachable URL
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/new", post(shorten_handler))
        .route("/url", get(resolve_handler))
}
