//! Repository trait for short link storage and lookup.

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::{ResolvedLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Backend that stores links and answers token lookups.
///
/// # Implementations
///
/// - [`crate::infrastructure::backends::DemoLinkRepository`] - fixed fabricated
///   record for any token, nothing stored
/// - [`crate::infrastructure::backends::InMemoryLinkRepository`] - token-keyed
///   map living for the process lifetime
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Short backend name reported by the health endpoint.
    fn backend_name(&self) -> &'static str;

    /// Whether `expires_at` on returned links is binding for redirects.
    fn enforces_expiry(&self) -> bool;

    /// Stores a newly shortened link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the token is already taken.
    async fn insert(&self, link: ShortLink) -> Result<(), AppError>;

    /// Looks up a token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ResolvedLink))` keyed by the requested token
    /// - `Ok(None)` if the token is unknown
    async fn resolve(&self, token: &str) -> Result<Option<ResolvedLink>, AppError>;

    /// Adds a followed-link event to the token's statistics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the token is unknown.
    async fn record_click(&self, event: ClickEvent) -> Result<(), AppError>;

    /// Drops links whose expiry has passed, returning how many were removed.
    async fn purge_expired(&self) -> Result<usize, AppError>;
}
