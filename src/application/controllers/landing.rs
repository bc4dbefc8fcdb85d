//! Landing page: shorten a URL, then show its preview, QR code and share links.

use std::sync::Arc;

use crate::api::dto::{ShortenRequest, ShortenResponse};
use crate::domain::{QrImage, ShortenerApi};
use crate::error::ClientError;
use crate::presentation::view::LandingView;
use crate::utils::share::SharePlatform;

pub const EMPTY_URL: &str = "Please enter a URL";
pub const SHORTEN_FAILED: &str = "Failed to shorten URL";
pub const NETWORK_ERROR: &str = "Network error. Please try again.";
pub const PREVIEW_UNAVAILABLE: &str = "Preview not available";
pub const QR_UNAVAILABLE: &str = "QR code not available";

pub struct LandingController<A: ShortenerApi, V: LandingView> {
    api: Arc<A>,
    view: Arc<V>,
}

impl<A: ShortenerApi, V: LandingView> LandingController<A, V> {
    pub fn new(api: Arc<A>, view: Arc<V>) -> Self {
        Self { api, view }
    }

    /// Shortens `url`, optionally under `custom_code`.
    ///
    /// The result panel is shown as soon as the server answers. Preview and QR
    /// code are then fetched concurrently and each renders on its own completion.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] for a blank URL; nothing is sent
    /// - [`ClientError::Server`] with the server's message
    /// - transport failures, shown as a generic network error
    pub async fn shorten(
        &self,
        url: &str,
        custom_code: Option<&str>,
    ) -> Result<ShortenResponse, ClientError> {
        let url = url.trim();
        if url.is_empty() {
            self.show_error(EMPTY_URL);
            return Err(ClientError::validation(EMPTY_URL));
        }

        let request = ShortenRequest {
            url: url.to_string(),
            custom_code: custom_code
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        };

        let short = match self.api.shorten(&request).await {
            Ok(short) => short,
            Err(e) => {
                let message = match &e {
                    ClientError::Server { .. } => e.user_message(SHORTEN_FAILED),
                    _ => {
                        tracing::error!(error = %e, "Error shortening URL");
                        NETWORK_ERROR
                    }
                };
                self.show_error(message);
                return Err(e);
            }
        };

        tracing::info!(code = %short.short_code, "URL shortened");
        self.view.show_result(&short.short_url);
        self.view.hide_error();

        tokio::join!(
            self.load_preview(&short.short_code),
            self.load_qr_code(&short.short_code)
        );

        Ok(short)
    }

    fn show_error(&self, message: &str) {
        self.view.show_error(message);
        self.view.hide_result();
    }

    async fn load_preview(&self, code: &str) {
        match self.api.preview(code).await {
            Ok(preview) => self.view.show_preview(&preview.original_url),
            Err(e) => {
                tracing::warn!(error = %e, code, "Error loading preview");
                self.view.show_preview(PREVIEW_UNAVAILABLE);
            }
        }
    }

    async fn load_qr_code(&self, code: &str) {
        let image = match self.api.qr_code(code).await {
            Ok(qr) => QrImage::from_base64(&qr.qr_code),
            Err(e) => Err(e),
        };
        match image {
            Ok(image) => self.view.show_qr_code(&image),
            Err(e) => {
                tracing::warn!(error = %e, code, "Error loading QR code");
                self.view.qr_unavailable(QR_UNAVAILABLE);
            }
        }
    }

    /// Share links for every supported platform.
    pub fn share_links(&self, short_url: &str) -> Vec<(SharePlatform, String)> {
        SharePlatform::ALL
            .into_iter()
            .map(|p| (p, p.share_url(short_url)))
            .collect()
    }
}
