//! Pocketbook - a personal budget analyzer and finance FAQ for the terminal
//!
//! Enter a month's income, expenses, savings and investments; Pocketbook
//! reports the remaining balance, warns when spending exceeds income, and
//! charts where the money goes. A small built-in FAQ answers common personal
//! finance questions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Core data models (money, budget input/result, FAQ entries)
//! - `services`: Budget calculation and FAQ lookup
//! - `reports`: Analysis report generation and export
//! - `display`: Plain-text formatting helpers
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use pocketbook_cli::models::{BudgetInput, CurrencySymbol, Money};
//! use pocketbook_cli::services::BudgetCalculator;
//!
//! let input = BudgetInput::new(
//!     Money::from_units(5000),
//!     Money::from_units(2000),
//!     Money::from_units(1000),
//!     Money::from_units(500),
//!     CurrencySymbol::Rupee,
//! )
//! .unwrap();
//! let result = BudgetCalculator::compute(&input);
//! assert_eq!(result.remaining, Money::from_units(1500));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::PocketbookError;
