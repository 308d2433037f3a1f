//! API route configuration.

use crate::api::handlers::{link_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /shorten`        - Shorten a URL
/// - `GET  /links/{token}`  - Link metadata and statistics
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links/{token}", get(link_handler))
}
