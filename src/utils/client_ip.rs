//! Client address resolution for click tracking.

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderMap;

const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";

/// Returns the visitor's IP.
///
/// Forwarding headers are only trusted when `behind_proxy` is set; a direct
/// client could otherwise pick any address it likes.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> IpAddr {
    if behind_proxy {
        forwarded_ip(headers).unwrap_or_else(|| peer.ip())
    } else {
        peer.ip()
    }
}

/// First `X-Forwarded-For` entry (the originating client), then `X-Real-IP`.
pub fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get(FORWARDED_FOR)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .and_then(|s| s.trim().parse().ok())
        .or_else(|| {
            headers
                .get(REAL_IP)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.trim().parse().ok())
        })
}
