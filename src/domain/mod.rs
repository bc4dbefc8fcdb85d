//! Client domain: gateway contract, view state and row actions.
//!
//! - [`gateway`] - [`ShortenerApi`] trait implemented by the HTTP client and by test mocks
//! - [`session`] - Admin session/tab state machine with request generations
//! - [`actions`] - Declarative row actions carried by table buttons
//! - [`chart`] - Chart datasets exposed by the dashboard
//! - [`qr`] - Decoded QR code image

pub mod actions;
pub mod chart;
pub mod gateway;
pub mod qr;
pub mod session;

pub use actions::RowAction;
pub use chart::ChartKind;
pub use gateway::ShortenerApi;
pub use qr::QrImage;
pub use session::{AdminState, LoadTicket, SessionState, Tab};
