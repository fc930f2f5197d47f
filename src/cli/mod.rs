//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod analyze;
pub mod config;
pub mod faq;

pub use analyze::{handle_analyze_command, AnalyzeArgs, OutputFormat};
pub use config::{handle_config_command, ConfigCommands};
pub use faq::{handle_faq_command, FaqCommands};
