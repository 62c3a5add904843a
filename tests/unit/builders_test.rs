//! Tests for builder modules

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use event_reminder::builders::{build_console_scheduler, build_scheduler};
use event_reminder::config::DaemonConfig;
use event_reminder::core::{Event, EventSource, NotificationSink, PollState, TickOutcome};
use event_reminder::infra::{InMemorySource, RecordingSink};
use event_reminder::runtime::TokioSpawner;
use event_reminder::util::ManualClock;

fn config(json_file: &str) -> DaemonConfig {
    DaemonConfig::from_json_str(&format!(
        r#"{{
            "notification": {{ "check_interval_ms": 1000, "retry_interval_ms": 5000 }},
            "events": {{ "json_file": "{json_file}" }}
        }}"#
    ))
    .unwrap()
}

fn clock_at(h: u32, m: u32) -> ManualClock {
    ManualClock::new(
        NaiveDate::from_ymd_opt(2024, 1, 8)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap(),
    )
}

#[tokio::test]
async fn test_build_scheduler_with_factories() {
    let source = InMemorySource::new(vec![Event::new(
        NaiveTime::from_hms_opt(7, 45, 0).unwrap(),
        "Coffee",
        "5m",
    )]);
    let sink = Arc::new(RecordingSink::new());

    let handle = source.clone();
    let recorder = Arc::clone(&sink);
    let mut scheduler = build_scheduler(
        &config("events.json"),
        move |_, _| Ok(handle),
        move |_, _| {
            let sink: Arc<dyn NotificationSink> = recorder;
            Ok(sink)
        },
        TokioSpawner::current(),
        Arc::new(clock_at(7, 45)),
    )
    .expect("scheduler");

    assert_eq!(scheduler.intervals().check, Duration::from_secs(1));
    assert_eq!(scheduler.intervals().retry, Duration::from_secs(5));

    let outcome = scheduler.tick();
    assert!(matches!(outcome, TickOutcome::Fired { .. }));
    assert_eq!(scheduler.state(), PollState::Check);
    assert_eq!(sink.wait_for(1).await[0].event.description, "Coffee");
}

#[tokio::test]
async fn test_build_console_scheduler_reads_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(&path, r#"[{"time": "12:00", "description": "Lunch", "duration": "1h"}]"#)
        .unwrap();

    let cfg = config(path.to_str().unwrap());
    let scheduler =
        build_console_scheduler(&cfg, TokioSpawner::current(), Arc::new(clock_at(8, 0)))
            .expect("scheduler");

    assert_eq!(scheduler.source().path(), path.as_path());
    assert_eq!(scheduler.source().fetch().len(), 1);
}

#[tokio::test]
async fn test_build_rejects_invalid_config() {
    let mut cfg = config("events.json");
    cfg.notification.retry_interval_ms = 0;

    let result = build_console_scheduler(&cfg, TokioSpawner::current(), Arc::new(clock_at(8, 0)));
    assert!(result.is_err());
}
