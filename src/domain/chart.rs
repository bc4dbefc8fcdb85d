//! Chart datasets exposed by the analytics dashboard.

use std::fmt;

/// One of the four dashboard charts. Each maps to its own data endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    ClicksOverTime,
    GeographicDistribution,
    TopUrls,
    DeviceTypes,
}

impl ChartKind {
    /// Load order used by the dashboard.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::ClicksOverTime,
        ChartKind::GeographicDistribution,
        ChartKind::TopUrls,
        ChartKind::DeviceTypes,
    ];

    /// Path segment under `/admin/dashboard/chart/`.
    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::ClicksOverTime => "clicks-over-time",
            ChartKind::GeographicDistribution => "geographic-distribution",
            ChartKind::TopUrls => "top-urls",
            ChartKind::DeviceTypes => "device-types",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::ClicksOverTime => "Clicks Over Time",
            ChartKind::GeographicDistribution => "Geographic Distribution",
            ChartKind::TopUrls => "Top URLs",
            ChartKind::DeviceTypes => "Device Types",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
