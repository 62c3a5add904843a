//! `reminderd`: watch the clock and print reminders for the configured events.
//!
//! Usage: `reminderd [CONFIG]`. The configuration path falls back to the
//! `REMINDER_CONFIG` environment variable (a `.env` file is honored), then to
//! `reminder.json` in the working directory.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use event_reminder::builders::build_console_scheduler;
use event_reminder::config::DaemonConfig;
use event_reminder::core::{AppResult, EventSource};
use event_reminder::runtime::{wait_for_shutdown_signal, TokioSpawner};
use event_reminder::util::{init_file_logging, init_tracing, SystemClock};

const DEFAULT_CONFIG: &str = "reminder.json";

fn config_path() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("REMINDER_CONFIG").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG))
}

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();

    let path = config_path();
    let cfg = DaemonConfig::from_path(&path)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;

    let _log_guard = match &cfg.logging {
        Some(logging) => Some(
            init_file_logging(logging, &cfg.format.datetime)
                .context("failed to initialize logging")?,
        ),
        None => {
            init_tracing();
            None
        }
    };

    let spawner = TokioSpawner::current();
    let scheduler = build_console_scheduler(&cfg, spawner.clone(), Arc::new(SystemClock))
        .context("failed to build scheduler")?;
    tracing::info!(
        config = %path.display(),
        events = scheduler.source().fetch().len(),
        "Start main loop"
    );

    let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
    let poll_loop = tokio::spawn(scheduler.run(stop_rx));

    wait_for_shutdown_signal()
        .await
        .context("failed to install signal handlers")?;
    tracing::info!("shutdown requested");
    stop_tx.send(true).ok();

    let ticks = poll_loop.await.context("poll loop panicked")?;
    if spawner.in_flight() > 0 {
        tracing::info!(open = spawner.in_flight(), "waiting for open notifications");
    }
    spawner.drain().await;
    tracing::info!(ticks, "stopped");
    Ok(())
}
