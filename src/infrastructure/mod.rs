//! Infrastructure layer: concrete gateway implementations.
//!
//! - [`http`] - reqwest client for the shortener server

pub mod http;
