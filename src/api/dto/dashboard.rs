//! DTOs for the analytics dashboard endpoints.

use serde::Deserialize;

/// Aggregate counters from `/admin/dashboard/stats`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_urls: i64,
    pub total_clicks: i64,
    pub active_urls: i64,
    #[serde(default)]
    pub top_country: Option<String>,
}

/// Parallel `labels` / `clicks` arrays shared by every chart endpoint.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub clicks: Vec<i64>,
}

impl ChartSeries {
    /// Pairs labels with values, ignoring any unmatched tail.
    pub fn points(&self) -> impl Iterator<Item = (&str, i64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.clicks.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.clicks.is_empty()
    }
}

/// One click from `/admin/dashboard/recent`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClickActivity {
    pub short_code: String,
    pub original_url: String,
    pub ip_address: String,
    #[serde(default)]
    pub country: Option<String>,
    pub timestamp: String,
}
