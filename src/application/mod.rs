//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API:
//!
//! - [`services::link_service::LinkService`] - Shortening, resolution and redirect lookup

pub mod services;
