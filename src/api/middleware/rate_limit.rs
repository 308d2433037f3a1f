//! Per-IP rate limiting for link creation.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Requests replenished per second for each client IP.
const PER_SECOND: u64 = 2;

/// Requests a client may send in a burst before being throttled.
const BURST_SIZE: u32 = 30;

/// Creates the rate limiter guarding the form submission and the JSON API.
///
/// Keys on the socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`. Requests over the
/// limit receive `429 Too Many Requests`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    governor_layer(PeerIpKeyExtractor)
}

/// Same limits as [`layer`], keyed on the client IP a reverse proxy reports.
///
/// Reads `X-Forwarded-For`, `X-Real-IP` and `Forwarded` before falling back
/// to the peer address. Only use when every request passes through a
/// trusted proxy.
pub fn proxied_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    governor_layer(SmartIpKeyExtractor)
}

fn governor_layer<K: KeyExtractor>(
    key_extractor: K,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(PER_SECOND)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
