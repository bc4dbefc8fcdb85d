//! Data Transfer Objects for the shortener HTTP API.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod shorten;
pub mod urls;
pub mod users;

pub use auth::{LoginRequest, SessionInfo};
pub use dashboard::{ChartSeries, ClickActivity, DashboardStats};
pub use error::ApiErrorBody;
pub use shorten::{PreviewResponse, QrCodeResponse, ShortenRequest, ShortenResponse};
pub use urls::{ToggleRequest, UrlRecord};
pub use users::UserRecord;
