//! Logging setup
//!
//! Installs a `tracing` subscriber. Command-line runs log to stderr; the TUI
//! logs to a file because stderr shares the terminal with the alternate
//! screen.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{PocketbookError, PocketbookResult};

/// Environment variable holding a tracing filter (e.g. `pocketbook_cli=debug`)
pub const LOG_ENV: &str = "POCKETBOOK_LOG";

/// Where log lines go
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Build the filter: `POCKETBOOK_LOG` if set and valid, else `default`
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber
pub fn init_logging(target: LogTarget, default_filter: &str) -> PocketbookResult<()> {
    let registry = tracing_subscriber::registry().with(env_filter(default_filter));

    let result = match target {
        LogTarget::Stderr => registry
            .with(fmt::layer().with_writer(io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    PocketbookError::Io(format!(
                        "Failed to open log file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
        }
    };

    result.map_err(|e| PocketbookError::Config(format!("Failed to initialize logging: {}", e)))
}
