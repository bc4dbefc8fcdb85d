//! DTOs for the public shortening endpoints.

use serde::{Deserialize, Serialize};

/// Form body of `/shorten`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShortenRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_code: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PreviewResponse {
    pub original_url: String,
}

/// `qr_code` is a base64-encoded PNG.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct QrCodeResponse {
    pub qr_code: String,
}
