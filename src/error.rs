//! Client-side error taxonomy.
//!
//! Every gateway call resolves to [`ClientError`] on failure. Controllers decide
//! per flow whether a failure is shown to the user or only logged.

use thiserror::Error;

/// Errors produced while talking to the shortener API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required field was empty; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// The server answered with a non-success status.
    ///
    /// `message` is the body's `error` field when present.
    #[error("{}", server_error_text(.status, .message))]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("invalid QR code payload: {0}")]
    InvalidQrCode(#[from] base64::DecodeError),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: Some(message.into()),
        }
    }

    /// Returns the server-supplied message for [`ClientError::Server`].
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Message to show the user: local validation text and server messages pass
    /// through verbatim, anything else collapses to `fallback`.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::Validation(message) => message,
            Self::Server {
                message: Some(message),
                ..
            } => message,
            _ => fallback,
        }
    }

    /// True for failures that never reached a server response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }
}

fn server_error_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("server responded with status {status}"),
    }
}
