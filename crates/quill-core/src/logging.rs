//! Tracing setup.
//!
//! The TUI owns the terminal, so logs always go to
//! ${QUILL_HOME}/logs/quill.log and never to stdout/stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, paths};

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "QUILL_LOG";

const LOG_FILE: &str = "quill.log";

/// Installs the global subscriber writing to the default log directory.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the background writer.
///
/// # Errors
/// Returns an error if the log directory cannot be created, the filter is
/// invalid, or a subscriber is already installed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), &config.log_level)
}

/// Installs the global subscriber writing to `dir`.
///
/// # Errors
/// See [`init`].
pub fn init_in(dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), default_filter)?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

/// Builds the filter, preferring the env override when it is set.
fn build_filter(env_value: Option<&str>, default_filter: &str) -> Result<EnvFilter> {
    let directive = env_value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default_filter);
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log filter: {directive}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_prefers_env_value() {
        let filter = build_filter(Some("quill_core=trace"), "info").unwrap();
        assert_eq!(filter.to_string(), "quill_core=trace");
    }

    #[test]
    fn test_filter_ignores_blank_env_value() {
        let filter = build_filter(Some("  "), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_invalid_filter_errors() {
        assert!(build_filter(None, "quill_core=loud").is_err());
    }
}
