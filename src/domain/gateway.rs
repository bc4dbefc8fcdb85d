//! Gateway trait for the shortener server API.

use crate::api::dto::{
    ChartSeries, ClickActivity, DashboardStats, LoginRequest, PreviewResponse, QrCodeResponse,
    SessionInfo, ShortenRequest, ShortenResponse, ToggleRequest, UrlRecord, UserRecord,
};
use crate::domain::chart::ChartKind;
use crate::error::ClientError;
use async_trait::async_trait;

/// Typed access to every endpoint the controllers consume.
///
/// Each call is one-shot: implementations must not retry. A non-success status
/// maps to [`ClientError::Server`] carrying the body's `error` string.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShortenerApi`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// Probes `/admin/session`. `Ok` means the session cookie is authenticated.
    async fn session(&self) -> Result<SessionInfo, ClientError>;

    /// Posts credentials to `/admin/login`.
    async fn login(&self, request: &LoginRequest) -> Result<SessionInfo, ClientError>;

    /// Posts `/admin/logout`. Any HTTP response counts as success; only
    /// transport failures are reported.
    async fn logout(&self) -> Result<(), ClientError>;

    async fn list_urls(&self) -> Result<Vec<UrlRecord>, ClientError>;

    async fn toggle_url(&self, id: i64, request: ToggleRequest) -> Result<(), ClientError>;

    async fn delete_url(&self, id: i64) -> Result<(), ClientError>;

    async fn list_users(&self) -> Result<Vec<UserRecord>, ClientError>;

    async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError>;

    async fn chart(&self, kind: ChartKind) -> Result<ChartSeries, ClientError>;

    async fn recent_activity(&self) -> Result<Vec<ClickActivity>, ClientError>;

    /// Submits a form-encoded `/shorten` request.
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ClientError>;

    async fn preview(&self, code: &str) -> Result<PreviewResponse, ClientError>;

    async fn qr_code(&self, code: &str) -> Result<QrCodeResponse, ClientError>;
}
