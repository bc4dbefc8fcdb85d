//! reqwest implementation of [`ShortenerApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::dto::{
    ApiErrorBody, ChartSeries, ClickActivity, DashboardStats, LoginRequest, PreviewResponse,
    QrCodeResponse, SessionInfo, ShortenRequest, ShortenResponse, ToggleRequest, UrlRecord,
    UserRecord,
};
use crate::api::routes;
use crate::config::Config;
use crate::domain::{ChartKind, ShortenerApi};
use crate::error::ClientError;

/// Gateway backed by a cookie-keeping reqwest client.
///
/// The admin session lives in the client's in-memory cookie jar, so one
/// instance corresponds to one browser tab: login, tab loads and logout must go
/// through the same value.
#[derive(Debug, Clone)]
pub struct HttpShortenerApi {
    client: Client,
    base_url: Url,
}

impl HttpShortenerApi {
    /// Creates a gateway for the server at `base_url`.
    ///
    /// `timeout` bounds each request; `None` waits indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] for an unparseable base URL and
    /// [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        // `Url::join` replaces the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder()
            .cookie_store(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(
            &config.base_url,
            config.request_timeout_seconds.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        tracing::debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "Response received"
        );
        Ok(response)
    }

    fn server_error(status: StatusCode, body: &[u8]) -> ClientError {
        let message = serde_json::from_slice::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        ClientError::Server {
            status: status.as_u16(),
            message,
        }
    }

    /// Decodes a success body as `T`, or turns a failure status into
    /// [`ClientError::Server`] carrying the body's `error` field.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(Self::server_error(status, &body));
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// Like [`Self::decode`] but ignores the success body.
    async fn expect_success(response: Response) -> Result<(), ClientError> {
        Self::decode::<serde_json::Value>(response).await.map(drop)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        let response = self.send(self.client.get(url)).await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl ShortenerApi for HttpShortenerApi {
    async fn session(&self) -> Result<SessionInfo, ClientError> {
        let url = self.endpoint(routes::SESSION)?;
        let response = self.send(self.client.get(url)).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(Self::server_error(status, &body));
        }

        // Only the status decides; an unexpected body still means signed in.
        Ok(serde_json::from_slice(&body).unwrap_or_default())
    }

    async fn login(&self, request: &LoginRequest) -> Result<SessionInfo, ClientError> {
        let url = self.endpoint(routes::LOGIN)?;
        let response = self.send(self.client.post(url).json(request)).await?;
        Self::decode(response).await
    }

    async fn logout(&self) -> Result<(), ClientError> {
        let url = self.endpoint(routes::LOGOUT)?;
        self.send(self.client.post(url)).await.map(drop)
    }

    async fn list_urls(&self) -> Result<Vec<UrlRecord>, ClientError> {
        self.get_json(routes::URLS).await
    }

    async fn toggle_url(&self, id: i64, request: ToggleRequest) -> Result<(), ClientError> {
        let url = self.endpoint(&routes::toggle_url(id))?;
        let response = self.send(self.client.post(url).json(&request)).await?;
        Self::expect_success(response).await
    }

    async fn delete_url(&self, id: i64) -> Result<(), ClientError> {
        let url = self.endpoint(&routes::delete_url(id))?;
        let response = self.send(self.client.post(url)).await?;
        Self::expect_success(response).await
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, ClientError> {
        self.get_json(routes::USERS).await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        self.get_json(routes::DASHBOARD_STATS).await
    }

    async fn chart(&self, kind: ChartKind) -> Result<ChartSeries, ClientError> {
        self.get_json(&routes::chart(kind.slug())).await
    }

    async fn recent_activity(&self) -> Result<Vec<ClickActivity>, ClientError> {
        self.get_json(routes::DASHBOARD_RECENT).await
    }

    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ClientError> {
        let url = self.endpoint(routes::SHORTEN)?;
        let response = self.send(self.client.post(url).form(request)).await?;
        Self::decode(response).await
    }

    async fn preview(&self, code: &str) -> Result<PreviewResponse, ClientError> {
        self.get_json(&routes::preview(code)).await
    }

    async fn qr_code(&self, code: &str) -> Result<QrCodeResponse, ClientError> {
        self.get_json(&routes::qr_code(code)).await
    }
}
