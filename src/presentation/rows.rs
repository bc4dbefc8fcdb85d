//! Table row models.
//!
//! Rows hold the exact strings a view displays so that formatting rules live in
//! one place and are testable without a renderer.

use crate::api::dto::{ClickActivity, DashboardStats, UrlRecord, UserRecord};
use crate::domain::RowAction;
use crate::utils::datetime::{format_date, format_datetime};

pub const UNKNOWN: &str = "Unknown";

/// A button and the action its data attribute encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowButton {
    pub label: &'static str,
    pub action: RowAction,
}

impl RowButton {
    /// Value of the button's `data-action` attribute.
    pub fn data_attr(&self) -> String {
        self.action.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRow {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub clicks: String,
    pub created: String,
    pub status: &'static str,
    pub toggle: RowButton,
    pub delete: RowButton,
}

impl From<&UrlRecord> for UrlRow {
    fn from(url: &UrlRecord) -> Self {
        Self {
            id: url.id,
            short_code: url.short_code.clone(),
            original_url: url.original_url.clone(),
            clicks: url.clicks.to_string(),
            created: format_date(&url.created_at),
            status: if url.is_active { "Active" } else { "Inactive" },
            toggle: RowButton {
                label: if url.is_active { "Disable" } else { "Enable" },
                action: RowAction::Toggle {
                    id: url.id,
                    is_active: url.is_active,
                },
            },
            delete: RowButton {
                label: "Delete",
                action: RowAction::Delete { id: url.id },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created: String,
    pub role: &'static str,
}

impl From<&UserRecord> for UserRow {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user
                .email
                .clone()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            created: format_date(&user.created_at),
            role: if user.is_admin { "Admin" } else { "User" },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    pub short_code: String,
    pub original_url: String,
    pub ip_address: String,
    pub country: String,
    pub timestamp: String,
}

impl From<&ClickActivity> for ActivityRow {
    fn from(activity: &ClickActivity) -> Self {
        Self {
            short_code: activity.short_code.clone(),
            original_url: activity.original_url.clone(),
            ip_address: activity.ip_address.clone(),
            country: activity
                .country
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            timestamp: format_datetime(&activity.timestamp),
        }
    }
}

/// Summary counters shown above the charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCards {
    pub total_urls: String,
    pub total_clicks: String,
    pub active_urls: String,
    pub top_country: String,
}

impl From<&DashboardStats> for StatCards {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            total_urls: stats.total_urls.to_string(),
            total_clicks: stats.total_clicks.to_string(),
            active_urls: stats.active_urls.to_string(),
            top_country: stats
                .top_country
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}
