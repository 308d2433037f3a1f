//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;
use tracing::debug;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Header carrying the visitor's country code when behind Cloudflare or a
/// similar edge proxy. Ignored unless the service is behind a proxy.
const COUNTRY_HEADER: &str = "cf-ipcountry";

/// Redirects a token to its original URL.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// # Click Tracking
///
/// Click events are sent to a bounded channel for async processing.
/// If the queue is full, the click is dropped (fire-and-forget).
/// Behind a proxy the visitor IP comes from `X-Forwarded-For`/`X-Real-IP`
/// and the country from `CF-IPCountry`; otherwise the peer address is used
/// and the country is left unknown.
///
/// # Errors
///
/// Returns 404 Not Found if the token doesn't resolve.
/// Returns 410 Gone if the link has expired.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.follow(&token).await?;

    let visitor_ip = client_ip(&headers, addr, state.behind_proxy);
    let country = if state.behind_proxy {
        headers.get(COUNTRY_HEADER).and_then(|v| v.to_str().ok())
    } else {
        None
    };

    let click_event = ClickEvent::new(
        token,
        Some(visitor_ip.to_string()),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        country,
    );

    if let Err(e) = state.click_sender.try_send(click_event) {
        debug!("Click event dropped: {}", e);
    }

    Ok(Redirect::temporary(&link.original_url))
}
