//! Builders to construct a poll scheduler from configuration.

use std::sync::Arc;

use crate::config::DaemonConfig;
use crate::core::{
    EventSource, NotificationSink, PollScheduler, ReminderError, Spawn, TimeFormat,
};
use crate::infra::{ConsoleSink, JsonFileSource};
use crate::util::clock::Clock;

/// Build a scheduler from daemon configuration using provided factories.
pub fn build_scheduler<Src, S, FS, FK>(
    cfg: &DaemonConfig,
    source_factory: FS,
    sink_factory: FK,
    spawner: S,
    clock: Arc<dyn Clock>,
) -> Result<PollScheduler<Src, S>, ReminderError>
where
    Src: EventSource,
    S: Spawn,
    FS: FnOnce(&DaemonConfig, &TimeFormat) -> Result<Src, ReminderError>,
    FK: FnOnce(&DaemonConfig, Arc<dyn Clock>) -> Result<Arc<dyn NotificationSink>, ReminderError>,
{
    cfg.validate()
        .map_err(|e| ReminderError::Config(format!("config invalid: {e}")))?;
    let format = cfg.time_format().map_err(ReminderError::Config)?;

    let source = source_factory(cfg, &format)?;
    let sink = sink_factory(cfg, Arc::clone(&clock))?;
    Ok(PollScheduler::new(
        source,
        sink,
        spawner,
        clock,
        format,
        cfg.notification.poll_intervals(),
    ))
}

/// Scheduler reading the configured JSON file and printing to the console.
pub fn build_console_scheduler<S: Spawn>(
    cfg: &DaemonConfig,
    spawner: S,
    clock: Arc<dyn Clock>,
) -> Result<PollScheduler<JsonFileSource, S>, ReminderError> {
    build_scheduler(
        cfg,
        |cfg, format| Ok(JsonFileSource::new(&cfg.events.json_file, format.clone())),
        |cfg, clock| {
            let sink: Arc<dyn NotificationSink> = Arc::new(ConsoleSink::from_config(cfg, clock)?);
            Ok(sink)
        },
        spawner,
        clock,
    )
}
