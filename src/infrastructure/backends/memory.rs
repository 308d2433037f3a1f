//! Process-local backend keyed by token.

use std::collections::{HashMap, HashSet, VecDeque};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::{CountEntry, RecentClick, ResolvedLink, ShortLink, UsageStats};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::display::format_click_time;
use crate::utils::user_agent::classify_user_agent;

/// Number of rows kept for the "recent clicks" table.
pub const RECENT_CLICKS_LIMIT: usize = 10;

/// Distinct visitor keys remembered per link. Past this, new visitors are
/// only counted.
pub const MAX_TRACKED_VISITORS: usize = 10_000;

const UNKNOWN_COUNTRY: &str = "Desconhecido";

/// Token-keyed link store with per-link click aggregation.
///
/// Unknown tokens resolve to `None`. Nothing survives a restart. Expired
/// links stay until the next [`LinkRepository::purge_expired`] sweep.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, StoredLink>>,
}

struct StoredLink {
    link: ShortLink,
    clicks: ClickLog,
}

#[derive(Default)]
struct ClickLog {
    views: u64,
    visitors: HashSet<String>,
    untracked_visitors: u64,
    countries: HashMap<String, u64>,
    devices: HashMap<&'static str, u64>,
    recent: VecDeque<LoggedClick>,
}

struct LoggedClick {
    at: DateTime<Utc>,
    location: String,
    platform: &'static str,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

impl ClickLog {
    /// Returns false when the click came from a crawler and was not counted.
    fn record(&mut self, event: &ClickEvent) -> bool {
        let device = classify_user_agent(event.user_agent.as_deref());
        if device.is_bot {
            return false;
        }
        let country = country_name(event.country.as_deref());

        self.views += 1;
        self.remember_visitor(event.visitor_key());
        *self.countries.entry(country.clone()).or_default() += 1;
        *self.devices.entry(device.category.label()).or_default() += 1;

        self.recent.push_front(LoggedClick {
            at: event.clicked_at,
            location: country,
            platform: device.platform,
        });
        self.recent.truncate(RECENT_CLICKS_LIMIT);
        true
    }

    fn remember_visitor(&mut self, key: &str) {
        if self.visitors.contains(key) {
            return;
        }
        if self.visitors.len() < MAX_TRACKED_VISITORS {
            self.visitors.insert(key.to_string());
        } else {
            self.untracked_visitors += 1;
        }
    }

    fn unique_visitors(&self) -> u64 {
        (self.visitors.len() as u64 + self.untracked_visitors).min(self.views)
    }

    fn snapshot(&self, now: DateTime<Utc>) -> UsageStats {
        UsageStats {
            views: self.views,
            unique_visitors: self.unique_visitors(),
            countries: sorted_breakdown(self.countries.iter().map(|(k, v)| (k.as_str(), *v))),
            devices: sorted_breakdown(self.devices.iter().map(|(k, v)| (*k, *v))),
            recent_clicks: self
                .recent
                .iter()
                .map(|click| {
                    RecentClick::new(
                        format_click_time(click.at, now),
                        click.location.clone(),
                        click.platform,
                    )
                })
                .collect(),
        }
    }
}

/// Highest count first, ties by name.
fn sorted_breakdown<'a>(entries: impl Iterator<Item = (&'a str, u64)>) -> Vec<CountEntry> {
    let mut list: Vec<CountEntry> = entries
        .map(|(name, count)| CountEntry::new(name, count))
        .collect();
    list.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    list
}

fn country_name(code: Option<&str>) -> String {
    match code {
        Some("BR") => "Brasil".to_string(),
        Some("PT") => "Portugal".to_string(),
        Some("US") => "Estados Unidos".to_string(),
        Some(other) => other.to_string(),
        None => UNKNOWN_COUNTRY.to_string(),
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn enforces_expiry(&self) -> bool {
        true
    }

    async fn insert(&self, link: ShortLink) -> Result<(), AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(&link.short_id) {
            return Err(AppError::conflict(
                "Token already exists",
                json!({ "token": link.short_id }),
            ));
        }

        debug!(token = %link.short_id, "Link stored");
        links.insert(
            link.short_id.clone(),
            StoredLink {
                link,
                clicks: ClickLog::default(),
            },
        );

        Ok(())
    }

    async fn resolve(&self, token: &str) -> Result<Option<ResolvedLink>, AppError> {
        let links = self.links.read().await;
        let now = Utc::now();

        Ok(links.get(token).map(|stored| ResolvedLink {
            link: stored.link.clone(),
            stats: stored.clicks.snapshot(now),
        }))
    }

    async fn record_click(&self, event: ClickEvent) -> Result<(), AppError> {
        let mut links = self.links.write().await;

        let stored = links.get_mut(&event.token).ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "token": event.token }))
        })?;
        if !stored.clicks.record(&event) {
            debug!(token = %event.token, "Crawler click ignored");
        }

        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, AppError> {
        let mut links = self.links.write().await;
        let now = Utc::now();
        let before = links.len();

        links.retain(|_, stored| !stored.link.is_expired_at(now));

        Ok(before - links.len())
    }
}
