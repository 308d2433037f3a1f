//! Click event model for asynchronous click tracking.

use chrono::{DateTime, Utc};

/// A followed short link, queued for the background click worker.
///
/// Created in the redirect handler so the redirect never waits on
/// statistics bookkeeping. Client metadata is optional because headers may
/// be missing.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub token: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    /// ISO country code supplied by an edge proxy (e.g. `CF-IPCountry`).
    pub country: Option<String>,
    pub clicked_at: DateTime<Utc>,
}

impl ClickEvent {
    /// Creates a click event stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let event = ClickEvent::new(
    ///     "x7k2pq".to_string(),
    ///     Some("192.168.1.1".to_string()),
    ///     Some("Mozilla/5.0"),
    ///     Some("BR"),
    /// );
    /// ```
    pub fn new(
        token: String,
        ip: Option<String>,
        user_agent: Option<&str>,
        country: Option<&str>,
    ) -> Self {
        Self {
            token,
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
            country: country
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(|c| c.to_ascii_uppercase()),
            clicked_at: Utc::now(),
        }
    }

    /// Key used to count unique visitors.
    pub fn visitor_key(&self) -> &str {
        self.ip.as_deref().unwrap_or("anonymous")
    }
}
