//! # Encurtador
//!
//! A URL shortener demo built with Axum and Askama: a form that turns a long
//! URL into a short token, and a result page with the link's usage
//! statistics.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link and statistics entities, repository trait, click tracking
//! - **Application Layer** ([`application`]) - Shortening and resolution service
//! - **Infrastructure Layer** ([`infrastructure`]) - Demo and in-memory link backends
//! - **API Layer** ([`api`]) - JSON API, redirect and health handlers, middleware
//! - **Web Layer** ([`web`]) - Server-rendered input form and result page
//!
//! ## Backends
//!
//! - `demo` (default) answers every token with the same fabricated record
//!   after an artificial delay
//! - `memory` stores links in process and aggregates real clicks
//!
//! ## Quick Start
//!
//! ```bash
//! export LINK_BACKEND=memory   # Optional, defaults to demo
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkSettings};
    pub use crate::domain::entities::{ResolvedLink, ShortLink, UsageStats};
    pub use crate::error::AppError;
    pub use crate::infrastructure::backends::{DemoLatency, DemoLinkRepository, InMemoryLinkRepository};
    pub use crate::state::AppState;
}
