//! Display formatting for terminal output
//!
//! Provides utilities for formatting reports for plain terminal display.

pub mod report;

pub use report::{format_bar, format_notice, format_percentage};
