// Rust guideline compliant 2026-02-06

//! Tracing setup for the feedback CLI.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr, or as JSON lines to `log_file` when one is given. The
/// returned guard must be held until exit so buffered file logs are flushed.
///
/// # Errors
///
/// Returns an error if:
/// - The level is not one of error, warn, info, debug
/// - The log file cannot be opened
/// - A global subscriber is already installed
pub fn init_tracing(level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .context("Failed to install tracing subscriber")?;
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;
    Ok(None)
}

/// Parses a log level name, case-insensitively.
///
/// # Errors
///
/// Returns an error for unknown level names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => anyhow::bail!("Invalid log level: {other}. Use error, warn, info, or debug"),
    }
}
