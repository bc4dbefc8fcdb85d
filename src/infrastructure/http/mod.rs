//! HTTP gateway for the shortener server.

mod shortener_api;

pub use shortener_api::HttpShortenerApi;
