//! UI chrome state (pure).
//!
//! Theme and panel visibility live outside the query engine. They never
//! influence filtering or aggregation.

pub mod panels;
pub mod theme;

pub use panels::PanelVisibility;
pub use theme::{terminal_prefers_dark, InvalidTheme, Theme};
