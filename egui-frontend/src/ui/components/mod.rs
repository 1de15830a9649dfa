//! # UI Components Module
//!
//! This module organizes all UI components for the finance control
//! application. Each submodule handles a specific aspect of the interface.
//!
//! ## Module Organization:
//! - `styling` - Visual styling, colors, and theme setup
//! - `header` - Balance display with sign-dependent color
//! - `money_controls` - Amount field and add/subtract buttons
//! - `transaction_table` - Transaction table rendering and formatting
//! - `chart_renderer` - Inflow and outflow line charts

pub mod chart_renderer;
pub mod header;
pub mod money_controls;
pub mod styling;
pub mod transaction_table;

pub use chart_renderer::*;
pub use styling::setup_tracker_style;
pub use transaction_table::*;
