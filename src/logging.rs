//! Logging configuration with file-based output.
//!
//! The terminal belongs to the UI, so logs go only to
//! `~/.config/countdown-tui/countdown-tui.log` (or the platform equivalent).
//! `RUST_LOG` overrides the default `info` filter.

use crate::config::APP_NAME;
use crate::error::Error;
use std::path::PathBuf;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const DEFAULT_FILTER: &str = "info";

/// Directory the log file is written to, if the platform has one.
pub fn log_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// Installs the global subscriber.
///
/// Returns a `WorkerGuard` that must be held for the lifetime of the program
/// so buffered lines are flushed on exit, or `None` when the platform has no
/// config directory and logging stays off.
pub fn init() -> crate::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(dir) = log_dir() else {
        return Ok(None);
    };
    std::fs::create_dir_all(&dir).map_err(Error::LogDir)?;

    let file_appender = tracing_appender::rolling::never(&dir, format!("{APP_NAME}.log"));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(filter)
        .init();

    tracing::info!(log_dir = ?dir, "logging initialized");
    Ok(Some(guard))
}
