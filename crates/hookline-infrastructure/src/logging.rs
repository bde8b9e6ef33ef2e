//! Tracing initialization.

use anyhow::{Result, anyhow};
use hookline_core::config::{DEFAULT_LOG_FILTER, LoggingConfig};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable overriding the configured filter.
///
/// Format: `HOOKLINE_LOG=hookline_application=debug,hookline_infrastructure=warn`
pub const LOG_ENV_VAR: &str = "HOOKLINE_LOG";

/// Log file prefix inside the logs directory.
const LOG_FILE_PREFIX: &str = "hookline.log";

/// Installs the global tracing subscriber.
///
/// Filter priority: `HOOKLINE_LOG`, then `config.filter`, then
/// `hookline=info`. When `config.log_to_file` is set and `logs_dir` is given,
/// a daily rolling file layer is added; keep the returned guard alive for
/// as long as logs should be flushed.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig, logs_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(config);

    let (file_layer, guard) = match logs_dir.filter(|_| config.log_to_file) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(guard)
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    resolve_filter(std::env::var(LOG_ENV_VAR).ok().as_deref(), &config.filter)
}

/// First valid directive wins: environment, configured, default.
fn resolve_filter(env_directive: Option<&str>, configured: &str) -> EnvFilter {
    env_directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
