//! Short link entity pairing an original URL with its token.

use chrono::{DateTime, Utc};

use crate::utils::display::format_long_date;

/// A shortened URL with its display metadata.
///
/// Created by the shortening operation and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub original_url: String,
    pub short_id: String,
    /// Display form, `<short-domain>/<short_id>` (no scheme).
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        original_url: String,
        short_id: String,
        short_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            original_url,
            short_id,
            short_url,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Creation date as shown to users, e.g. `27 de Abril, 2025`.
    pub fn created_at_display(&self) -> String {
        format_long_date(self.created_at)
    }

    /// Expiry date as shown to users.
    pub fn expires_at_display(&self) -> String {
        format_long_date(self.expires_at)
    }

    /// Absolute URL a browser can follow.
    pub fn visit_url(&self) -> String {
        format!("https://{}", self.short_url)
    }

    /// Whole days between creation and expiry.
    pub fn lifetime_days(&self) -> i64 {
        (self.expires_at - self.created_at).num_days()
    }

    /// Display form `<short_domain>/<token>`; a trailing `/` on the domain is dropped.
    pub fn display_url(short_domain: &str, token: &str) -> String {
        format!("{}/{}", short_domain.trim_end_matches('/'), token)
    }
}
