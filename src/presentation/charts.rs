//! Declarative chart configurations.
//!
//! A [`ChartConfig`] serializes to the JSON shape Chart.js-style widgets accept,
//! so the same value drives a browser widget or the terminal bar renderer.

use serde::Serialize;

use crate::api::dto::ChartSeries;
use crate::domain::ChartKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Doughnut,
    Pie,
}

impl ChartType {
    /// True for charts that show shares of a whole.
    pub fn is_proportional(self) -> bool {
        matches!(self, ChartType::Doughnut | ChartType::Pie)
    }
}

/// A single colour or one colour per data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Palette {
    Single(&'static str),
    PerPoint(Vec<&'static str>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<i64>,
    pub background_color: Palette,
    pub border_color: Palette,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartConfig {
    #[serde(skip)]
    pub kind: ChartKind,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

const INDIGO: (&str, &str) = ("rgba(102, 126, 234, 0.6)", "rgba(102, 126, 234, 1)");
const PURPLE: (&str, &str) = ("rgba(118, 75, 162, 0.6)", "rgba(118, 75, 162, 1)");
const RED: (&str, &str) = ("rgba(255, 99, 132, 0.6)", "rgba(255, 99, 132, 1)");
const BLUE: (&str, &str) = ("rgba(54, 162, 235, 0.6)", "rgba(54, 162, 235, 1)");
const YELLOW: (&str, &str) = ("rgba(255, 206, 86, 0.6)", "rgba(255, 206, 86, 1)");
const TEAL: (&str, &str) = ("rgba(75, 192, 192, 0.6)", "rgba(75, 192, 192, 1)");
const VIOLET: (&str, &str) = ("rgba(153, 102, 255, 0.6)", "rgba(153, 102, 255, 1)");

fn palette(colours: &[(&'static str, &'static str)]) -> (Palette, Palette) {
    (
        Palette::PerPoint(colours.iter().map(|c| c.0).collect()),
        Palette::PerPoint(colours.iter().map(|c| c.1).collect()),
    )
}

impl ChartConfig {
    /// Empty chart as created before its data is fetched.
    pub fn empty(kind: ChartKind) -> Self {
        let (chart_type, label, (background_color, border_color), scales) = match kind {
            ChartKind::ClicksOverTime => (
                ChartType::Line,
                "Clicks",
                (Palette::Single(INDIGO.0), Palette::Single(INDIGO.1)),
                None,
            ),
            ChartKind::GeographicDistribution => (
                ChartType::Doughnut,
                "Clicks by Country",
                palette(&[INDIGO, PURPLE, RED, BLUE, YELLOW, TEAL, VIOLET]),
                None,
            ),
            ChartKind::TopUrls => (
                ChartType::Bar,
                "Click Count",
                (Palette::Single(PURPLE.0), Palette::Single(PURPLE.1)),
                Some(Scales {
                    y: Axis {
                        begin_at_zero: true,
                    },
                }),
            ),
            ChartKind::DeviceTypes => (
                ChartType::Pie,
                "Clicks by Device",
                palette(&[BLUE, RED, YELLOW]),
                None,
            ),
        };

        Self {
            kind,
            chart_type,
            data: ChartData {
                labels: Vec::new(),
                datasets: vec![Dataset {
                    label,
                    data: Vec::new(),
                    background_color,
                    border_color,
                    border_width: 1,
                }],
            },
            options: ChartOptions {
                responsive: true,
                plugins: Plugins {
                    legend: Legend { position: "top" },
                },
                scales,
            },
        }
    }

    /// Replaces labels and the first dataset's values.
    pub fn apply(&mut self, series: &ChartSeries) {
        self.data.labels = series.labels.clone();
        if let Some(dataset) = self.data.datasets.first_mut() {
            dataset.data = series.clicks.clone();
        }
    }

    /// Label/value pairs of the first dataset.
    pub fn points(&self) -> Vec<(&str, i64)> {
        let values = self
            .data
            .datasets
            .first()
            .map(|d| d.data.as_slice())
            .unwrap_or_default();
        self.data
            .labels
            .iter()
            .map(String::as_str)
            .zip(values.iter().copied())
            .collect()
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}
