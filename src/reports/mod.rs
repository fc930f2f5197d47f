//! Reports module for Pocketbook
//!
//! Provides the budget analysis report: chart data, text rendering and
//! CSV/JSON/YAML export.

pub mod analysis;

pub use analysis::{AnalysisReport, ChartSlice};
