//! Telemetry helpers for structured logging and tracing.

use std::fmt;

use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::core::ReminderError;
use crate::util::rotating::RotatingFile;

/// Initialize tracing/telemetry. Users can install their own subscriber; this
/// helper installs a default env-based subscriber if none is set.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .try_init();
}

/// Log to stderr and to a size-rotated file described by `cfg`.
///
/// Timestamps use the strftime `datetime_format` in local time. The returned
/// guard flushes the file writer on drop; keep it alive for the process
/// lifetime.
pub fn init_file_logging(
    cfg: &LoggingConfig,
    datetime_format: &str,
) -> Result<WorkerGuard, ReminderError> {
    let file = RotatingFile::open(&cfg.log_dir, &cfg.log_file, cfg.max_bytes, cfg.backup_count)
        .map_err(|e| {
            ReminderError::Config(format!(
                "cannot open log file {}: {e}",
                cfg.log_dir.join(&cfg.log_file).display()
            ))
        })?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let timer = LocalTimer::new(datetime_format);

    tracing_subscriber::registry()
        .with(default_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(timer.clone()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_timer(timer),
        )
        .try_init()
        .map_err(|e| ReminderError::Config(format!("tracing already initialized: {e}")))?;

    Ok(guard)
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Local-time log timestamps with a strftime pattern.
#[derive(Debug, Clone)]
pub struct LocalTimer {
    pattern: String,
}

impl LocalTimer {
    /// Timer rendering with `pattern`.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(&self.pattern))
    }
}
