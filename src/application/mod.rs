//! Application layer: one controller per page.
//!
//! Controllers own the page's view state, call the gateway and hand row models
//! to a view. They never fail the caller for a sub-load: failures degrade to a
//! fallback message, the login screen, or the table already on screen.

pub mod controllers;
