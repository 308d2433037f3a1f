//! DTOs for link resolution endpoint.

use serde::Serialize;

use crate::domain::entities::{CountEntry, RecentClick, ResolvedLink, ShortLink, UsageStats};

/// A resolved link with its statistics snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub link: ShortLinkDto,
    pub stats: UsageStatsDto,
    /// `round(uniqueVisitors / views * 100)`, 0 without views.
    pub conversion_rate: u32,
}

/// Link metadata; dates use the display form (`27 de Abril, 2025`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkDto {
    pub original_url: String,
    pub short_id: String,
    pub short_url: String,
    pub created_at: String,
    pub expires_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStatsDto {
    pub views: u64,
    pub unique_visitors: u64,
    pub countries: Vec<CountDto>,
    pub devices: Vec<CountDto>,
    pub recent_clicks: Vec<RecentClickDto>,
}

#[derive(Debug, Serialize)]
pub struct CountDto {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct RecentClickDto {
    pub time: String,
    pub location: String,
    pub device: String,
}

impl From<ShortLink> for ShortLinkDto {
    fn from(link: ShortLink) -> Self {
        Self {
            created_at: link.created_at_display(),
            expires_at: link.expires_at_display(),
            original_url: link.original_url,
            short_id: link.short_id,
            short_url: link.short_url,
        }
    }
}

impl From<CountEntry> for CountDto {
    fn from(entry: CountEntry) -> Self {
        Self {
            name: entry.name,
            count: entry.count,
        }
    }
}

impl From<RecentClick> for RecentClickDto {
    fn from(click: RecentClick) -> Self {
        Self {
            time: click.time,
            location: click.location,
            device: click.device,
        }
    }
}

impl From<UsageStats> for UsageStatsDto {
    fn from(stats: UsageStats) -> Self {
        Self {
            views: stats.views,
            unique_visitors: stats.unique_visitors,
            countries: stats.countries.into_iter().map(Into::into).collect(),
            devices: stats.devices.into_iter().map(Into::into).collect(),
            recent_clicks: stats.recent_clicks.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ResolvedLink> for LinkResponse {
    fn from(resolved: ResolvedLink) -> Self {
        let conversion_rate = resolved.stats.conversion_rate_percent();

        Self {
            link: resolved.link.into(),
            stats: resolved.stats.into(),
            conversion_rate,
        }
    }
}
