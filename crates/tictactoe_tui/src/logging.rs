//! Tracing subscriber setup.

use crate::config::GameConfig;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sends logs to the configured file so they don't interfere with the TUI.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_file_logging(config: &GameConfig) -> anyhow::Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Sends logs to stderr, for the non-interactive commands.
pub fn init_stderr_logging(config: &GameConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

fn filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}
