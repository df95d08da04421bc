//! Log setup
//!
//! The terminal belongs to the UI, so logs only go to a rolling file.
//! Precedence: RUST_LOG env var > config file level.

use raid_core::config::LoggingConfig;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directory logs are written to
pub fn log_dir(config: &LoggingConfig) -> Option<PathBuf> {
    config
        .directory
        .clone()
        .or_else(|| dirs::cache_dir().map(|d| d.join("raid_stats")))
}

/// Install the global subscriber. The returned guard must live until exit so
/// buffered lines are flushed.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    if !config.file_enabled {
        return None;
    }

    let dir = log_dir(config)?;
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Warning: Could not create log directory {:?}: {}", dir, e);
        return None;
    }

    let default_filter = format!("raid_tui={0},raid_core={0}", config.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let file_appender = tracing_appender::rolling::daily(&dir, &config.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}
