// src/logging.rs
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set, by number of `-v` flags.
#[inline]
#[must_use]
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Logs go to stderr so the report on
/// stdout stays clean.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
#[inline]
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
