//! Fixed-data backend reproducing the original demo behaviour.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::{CountEntry, RecentClick, ResolvedLink, ShortLink, UsageStats};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Original URL every demo token resolves to.
pub const DEMO_ORIGINAL_URL: &str = "https://exemplo.com/artigo/como-utilizar-tecnologias-modernas-para-desenvolvimento-web-em-2025-novas-tendencias";

/// Artificial latency standing in for a remote call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoLatency {
    pub shorten: Duration,
    pub resolve: Duration,
}

impl DemoLatency {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Backend that stores nothing and resolves every token to the same record.
///
/// Shortening always succeeds and resolution never reports not-found. The
/// returned record carries the requested token, everything else is constant.
pub struct DemoLinkRepository {
    short_domain: String,
    latency: DemoLatency,
}

impl DemoLinkRepository {
    pub fn new(short_domain: impl Into<String>, latency: DemoLatency) -> Self {
        Self {
            short_domain: short_domain.into(),
            latency,
        }
    }

    /// Builds the fabricated record for `token`.
    pub fn record_for(&self, token: &str) -> ResolvedLink {
        let link = ShortLink::new(
            DEMO_ORIGINAL_URL.to_string(),
            token.to_string(),
            ShortLink::display_url(&self.short_domain, token),
            demo_date(2025, 4, 27),
            demo_date(2026, 4, 27),
        );

        let stats = UsageStats {
            views: 142,
            unique_visitors: 87,
            countries: vec![
                CountEntry::new("Brasil", 64),
                CountEntry::new("Portugal", 12),
                CountEntry::new("Estados Unidos", 8),
                CountEntry::new("Outros", 3),
            ],
            devices: vec![
                CountEntry::new("Mobile", 95),
                CountEntry::new("Desktop", 38),
                CountEntry::new("Tablet", 9),
            ],
            recent_clicks: vec![
                RecentClick::new("Hoje, 14:32", "São Paulo, BR", "Android"),
                RecentClick::new("Hoje, 13:15", "Lisboa, PT", "iPhone"),
                RecentClick::new("Hoje, 11:47", "Rio de Janeiro, BR", "Windows"),
                RecentClick::new("Ontem, 22:05", "Porto Alegre, BR", "MacOS"),
            ],
        };

        ResolvedLink { link, stats }
    }
}

fn demo_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl LinkRepository for DemoLinkRepository {
    fn backend_name(&self) -> &'static str {
        "demo"
    }

    fn enforces_expiry(&self) -> bool {
        false
    }

    async fn insert(&self, link: ShortLink) -> Result<(), AppError> {
        simulate_latency(self.latency.shorten).await;
        debug!(token = %link.short_id, "Demo backend discards new link");
        Ok(())
    }

    async fn resolve(&self, token: &str) -> Result<Option<ResolvedLink>, AppError> {
        simulate_latency(self.latency.resolve).await;
        Ok(Some(self.record_for(token)))
    }

    async fn record_click(&self, event: ClickEvent) -> Result<(), AppError> {
        debug!(token = %event.token, "Demo backend ignores click");
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, AppError> {
        Ok(0)
    }
}
