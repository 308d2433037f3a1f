//! Link shortening and resolution service.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeDelta, Utc};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{ResolvedLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::token_generator::{DEFAULT_TOKEN_LENGTH, generate_token, is_valid_token};
use crate::utils::url_validator::validate_url_input;

/// Tunables for [`LinkService`].
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// Host shown in front of the token, e.g. `short.url`.
    pub short_domain: String,
    pub token_length: usize,
    /// Lifetime of a newly created link.
    pub link_ttl: TimeDelta,
    /// Upper bound for a single repository call.
    pub operation_timeout: Duration,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            short_domain: "short.url".to_string(),
            token_length: DEFAULT_TOKEN_LENGTH,
            link_ttl: TimeDelta::days(365),
            operation_timeout: Duration::from_secs(5),
        }
    }
}

/// Service for creating and resolving short links.
///
/// Validates submitted URLs, generates tokens, and bounds every repository
/// call with a timeout so a stalled backend surfaces as
/// [`AppError::OperationFailed`] instead of a hung request.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    settings: LinkSettings,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>, settings: LinkSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Name of the backing repository.
    pub fn backend_name(&self) -> &'static str {
        self.repository.backend_name()
    }

    /// Display form of the short URL for `token`.
    pub fn short_url(&self, token: &str) -> String {
        ShortLink::display_url(&self.settings.short_domain, token)
    }

    /// Shortens `original_url` under a freshly generated token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or lacks an
    /// `http://`/`https://` prefix.
    ///
    /// Returns [`AppError::OperationFailed`] if the backend times out or no
    /// free token is found.
    pub async fn shorten(&self, original_url: &str) -> Result<ShortLink, AppError> {
        let url = validate_url_input(original_url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "url": original_url }))
        })?;

        let link = self
            .with_timeout("shorten", self.insert_with_fresh_token(url))
            .await?;

        info!(token = %link.short_id, backend = self.backend_name(), "Short link created");
        Ok(link)
    }

    /// Resolves a token to its link and statistics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the token is unknown.
    /// Returns [`AppError::OperationFailed`] if the backend times out.
    pub async fn resolve(&self, token: &str) -> Result<ResolvedLink, AppError> {
        self.with_timeout("resolve", self.repository.resolve(token))
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "token": token })))
    }

    /// Resolves a token for redirection.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`], plus [`AppError::Gone`] when the backend
    /// enforces expiry and the link has expired. Paths that cannot be a
    /// token (`favicon.ico`, upper case) are not found without a lookup.
    pub async fn follow(&self, token: &str) -> Result<ShortLink, AppError> {
        if !is_valid_token(token) {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "token": token }),
            ));
        }

        let resolved = self.resolve(token).await?;

        if self.repository.enforces_expiry() && resolved.link.is_expired() {
            return Err(AppError::gone(
                "Short link has expired",
                json!({ "token": token, "expired_at": resolved.link.expires_at }),
            ));
        }

        Ok(resolved.link)
    }

    /// Generates tokens until the repository accepts one.
    ///
    /// Attempts up to 10 times before failing.
    async fn insert_with_fresh_token(&self, url: &str) -> Result<ShortLink, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        let created_at = Utc::now();
        let expires_at = created_at
            .checked_add_signed(self.settings.link_ttl)
            .ok_or_else(|| {
                AppError::operation_failed(
                    "Link lifetime out of range",
                    json!({ "ttl_seconds": self.settings.link_ttl.num_seconds() }),
                )
            })?;

        for _ in 0..MAX_ATTEMPTS {
            let token = generate_token(self.settings.token_length);
            let link = ShortLink::new(
                url.to_string(),
                token.clone(),
                self.short_url(&token),
                created_at,
                expires_at,
            );

            match self.repository.insert(link.clone()).await {
                Ok(()) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    debug!(token = %token, "Token collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::operation_failed(
            "Failed to generate unique token",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    async fn with_timeout<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        match tokio::time::timeout(self.settings.operation_timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                warn!(operation, timeout = ?self.settings.operation_timeout, "Operation timed out");
                Err(AppError::operation_failed(
                    "Operation timed out",
                    json!({ "operation": operation }),
                ))
            }
        }
    }
}
