//! Page controllers.
//!
//! - [`AdminController`] - Session-gated dashboard with URL/user management
//! - [`LandingController`] - Shorten flow with preview and QR code
//! - [`AnalyticsController`] - Statistics, charts and recent clicks

pub mod admin;
pub mod analytics;
pub mod landing;

pub use admin::AdminController;
pub use analytics::AnalyticsController;
pub use landing::LandingController;
