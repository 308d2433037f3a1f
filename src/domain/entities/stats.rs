//! Usage statistics attached to a short link.

use super::ShortLink;

/// A named counter in a breakdown (countries, devices).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEntry {
    pub name: String,
    pub count: u64,
}

impl CountEntry {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// One row of the "recent clicks" table, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentClick {
    pub time: String,
    pub location: String,
    pub device: String,
}

impl RecentClick {
    pub fn new(
        time: impl Into<String>,
        location: impl Into<String>,
        device: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            location: location.into(),
            device: device.into(),
        }
    }
}

/// Aggregate click/visitor analytics for one link.
///
/// `unique_visitors` never exceeds `views`. The breakdown sums are not tied
/// to `views`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageStats {
    pub views: u64,
    pub unique_visitors: u64,
    pub countries: Vec<CountEntry>,
    pub devices: Vec<CountEntry>,
    /// Most recent first.
    pub recent_clicks: Vec<RecentClick>,
}

impl UsageStats {
    /// Share of views coming from unique visitors, rounded to a whole percent.
    ///
    /// Returns 0 when there are no views.
    pub fn conversion_rate_percent(&self) -> u32 {
        if self.views == 0 {
            return 0;
        }

        ((self.unique_visitors as f64 / self.views as f64) * 100.0).round() as u32
    }
}

/// Result of resolving a token: the link and a snapshot of its stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub link: ShortLink,
    pub stats: UsageStats,
}
