//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, result_handler, submit_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Form submission; rate limited by the top-level router.
///
/// # Endpoints
///
/// - `POST /` - Shorten the submitted URL
pub fn submit_routes() -> Router<AppState> {
    Router::new().route("/", post(submit_handler))
}

/// Read-only pages.
///
/// # Endpoints
///
/// - `GET /`               - URL input form
/// - `GET /result/{token}` - Link details and statistics
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/result/{token}", get(result_handler))
}
