//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                - URL input form
//! - `POST /`                - Form submission (rate limited)
//! - `GET  /result/{token}`  - Result page with statistics
//! - `GET  /{token}`         - Short link redirect
//! - `GET  /health`          - Health check
//! - `/api/*`                - JSON API (rate limited)
//! - `/static/*`             - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on link creation (`POST /` and
//!   `/api/*`); pages, redirects and static assets are not limited
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting and click tracking read the
///   client IP from `X-Forwarded-For` / `X-Real-IP` instead of the peer
///   socket address; enable only behind a trusted reverse proxy
///
/// The returned service must be served with connect info (see
/// [`crate::server::run`]).
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let state = state.with_behind_proxy(behind_proxy);

    let api_router = rate_limited(api::routes::routes(), behind_proxy);
    let submit_router = rate_limited(web::routes::submit_routes(), behind_proxy);

    let router = Router::new()
        .merge(submit_router)
        .merge(web::routes::page_routes())
        .route("/health", get(health_handler))
        .route("/{token}", get(redirect_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn rate_limited(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        router.layer(rate_limit::proxied_layer())
    } else {
        router.layer(rate_limit::layer())
    }
}
