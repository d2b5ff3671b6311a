//! Tracing subscriber setup.

use crate::AppConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to the configured file so output does not interfere with the TUI.
pub fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr, keeping stdout free for command output.
pub fn init_stderr_logging(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
