//! Endpoint paths of the shortener server, relative to the configured base URL.

pub const SESSION: &str = "admin/session";
pub const LOGIN: &str = "admin/login";
pub const LOGOUT: &str = "admin/logout";
pub const URLS: &str = "admin/urls";
pub const USERS: &str = "admin/users";
pub const DASHBOARD_STATS: &str = "admin/dashboard/stats";
pub const DASHBOARD_RECENT: &str = "admin/dashboard/recent";
pub const SHORTEN: &str = "shorten";

pub fn toggle_url(id: i64) -> String {
    format!("admin/urls/{id}/toggle")
}

pub fn delete_url(id: i64) -> String {
    format!("admin/urls/{id}/delete")
}

/// `slug` is one of the chart identifiers, e.g. `clicks-over-time`.
pub fn chart(slug: &str) -> String {
    format!("admin/dashboard/chart/{slug}")
}

pub fn preview(code: &str) -> String {
    format!("preview/{}", urlencoding::encode(code))
}

pub fn qr_code(code: &str) -> String {
    format!("qr/{}", urlencoding::encode(code))
}
