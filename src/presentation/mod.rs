//! Presentation layer: the rendering boundary and its terminal implementation.
//!
//! Controllers never format output themselves. They build row models and chart
//! configs and hand them to a view trait:
//!
//! - [`view`] - [`AdminView`], [`LandingView`], [`AnalyticsView`]
//! - [`rows`] - Table row models with their display strings
//! - [`charts`] - Declarative chart configurations
//! - [`terminal`] - Colored terminal rendering with interactive confirmation

pub mod charts;
pub mod rows;
pub mod terminal;
pub mod view;

pub use charts::ChartConfig;
pub use rows::{ActivityRow, RowButton, StatCards, UrlRow, UserRow};
pub use terminal::TerminalView;
pub use view::{AdminView, AnalyticsView, LandingView};

#[cfg(test)]
pub(crate) mod testing;
