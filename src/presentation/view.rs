//! Rendering boundary used by the controllers.
//!
//! Implementations must be cheap and non-blocking, except for
//! [`AdminView::confirm`] which may wait for the user.

use crate::api::dto::SessionInfo;
use crate::domain::{QrImage, Tab};
use crate::presentation::charts::ChartConfig;
use crate::presentation::rows::{ActivityRow, StatCards, UrlRow, UserRow};

/// Admin panel: login form, dashboard and its three tabs.
pub trait AdminView: Send + Sync {
    /// Shows the login form and hides the dashboard.
    fn show_login(&self);

    /// Shows the dashboard and hides the login form.
    fn show_dashboard(&self, identity: Option<&SessionInfo>);

    fn show_login_error(&self, message: &str);

    fn hide_login_error(&self);

    /// Marks `tab` active and shows its panel.
    fn activate_tab(&self, tab: Tab);

    /// Replaces the whole URLs table.
    fn render_urls(&self, rows: &[UrlRow]);

    /// Replaces the whole users table.
    fn render_users(&self, rows: &[UserRow]);

    fn render_analytics(&self, cards: &StatCards);

    /// Asks the user to confirm a destructive action.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Landing page: shorten form, result, preview, QR code.
pub trait LandingView: Send + Sync {
    fn show_result(&self, short_url: &str);

    fn hide_result(&self);

    fn show_error(&self, message: &str);

    fn hide_error(&self);

    /// Shows the original URL, or a fallback text when unavailable.
    fn show_preview(&self, text: &str);

    fn show_qr_code(&self, image: &QrImage);

    fn qr_unavailable(&self, message: &str);
}

/// Analytics dashboard: stat cards, four charts, recent activity.
pub trait AnalyticsView: Send + Sync {
    fn render_stats(&self, cards: &StatCards);

    /// Creates an empty chart widget.
    fn init_chart(&self, chart: &ChartConfig);

    /// Redraws a chart after its data arrived.
    fn update_chart(&self, chart: &ChartConfig);

    fn render_recent_activity(&self, rows: &[ActivityRow]);
}
