//! QR code payload decoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ClientError;

/// A PNG QR code as delivered by `/qr/:code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    /// Raw PNG bytes.
    pub png: Vec<u8>,
    /// `data:image/png;base64,...` URI suitable for an `<img>` source.
    pub data_uri: String,
}

impl QrImage {
    /// Decodes the server's base64 payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidQrCode`] if the payload is not valid base64.
    pub fn from_base64(encoded: &str) -> Result<Self, ClientError> {
        let encoded = encoded.trim();
        let png = STANDARD.decode(encoded)?;
        Ok(Self {
            png,
            data_uri: format!("data:image/png;base64,{encoded}"),
        })
    }
}
