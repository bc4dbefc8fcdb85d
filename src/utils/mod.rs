//! Helpers shared by the controllers and views.
//!
//! - [`datetime`] - Lenient timestamp formatting
//! - [`share`] - Social share links

pub mod datetime;
pub mod share;
