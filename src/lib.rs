//! # URL Shortener Console
//!
//! Terminal client for the url-shortener server: a public shorten/preview/QR
//! flow, an analytics dashboard and a session-gated admin console.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Gateway trait, admin session state machine, row actions
//! - **Application Layer** ([`application`]) - One controller per page
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest gateway with a cookie jar
//! - **API Layer** ([`api`]) - Wire DTOs and endpoint paths
//! - **Presentation Layer** ([`presentation`]) - View traits, row models, terminal rendering
//!
//! Controllers are generic over [`domain::ShortenerApi`] and a view trait, so
//! every state transition can be tested with `mockall` mocks and a recording view.
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_BASE_URL="http://127.0.0.1:5000"
//!
//! cargo run --bin shortener -- shorten https://example.com --qr-out qr.png
//! cargo run --bin shortener -- analytics
//! cargo run --bin admin
//! ```
//!
//! ## Configuration
//!
//! Client configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod utils;

pub mod config;
pub mod telemetry;

pub use error::ClientError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the binaries
/// and integration tests.
pub mod prelude {
    pub use crate::application::controllers::{
        AdminController, AnalyticsController, LandingController,
    };
    pub use crate::domain::{ChartKind, RowAction, SessionState, ShortenerApi, Tab};
    pub use crate::error::ClientError;
    pub use crate::infrastructure::http::HttpShortenerApi;
    pub use crate::presentation::TerminalView;
}
