//! Wire contract of the shortener server.
//!
//! # Modules
//!
//! - [`dto`] - Request and response shapes exchanged with the server
//! - [`routes`] - Endpoint paths

pub mod dto;
pub mod routes;
