//! Tests for configuration validation

use std::time::Duration;

use event_reminder::config::DaemonConfig;

const VALID: &str = r#"{
    "format": { "time": "%H:%M", "datetime": "%Y-%m-%d %H:%M:%S" },
    "notification": {
        "check_interval_ms": 60000,
        "retry_interval_ms": 30000,
        "window_title": "Reminder",
        "active_color": "green",
        "inactive_color": "red"
    },
    "events": { "json_file": "events.json" },
    "logging": {
        "log_dir": "logs",
        "log_file": "reminder.log",
        "max_bytes": 1048576,
        "backup_count": 3
    },
    "sound": { "command": "afplay", "file_path": "ding.wav" }
}"#;

fn with(patch: impl FnOnce(&mut serde_json::Value)) -> String {
    let mut value: serde_json::Value = serde_json::from_str(VALID).unwrap();
    patch(&mut value);
    value.to_string()
}

#[test]
fn test_config_from_json() {
    let cfg = DaemonConfig::from_json_str(VALID).expect("valid config");
    let intervals = cfg.notification.poll_intervals();
    assert_eq!(intervals.check, Duration::from_secs(60));
    assert_eq!(intervals.retry, Duration::from_secs(30));
    assert_eq!(cfg.notification.refresh_interval(), Duration::from_secs(60));
    assert_eq!(cfg.logging.unwrap().path().to_str(), Some("logs/reminder.log"));
    assert_eq!(cfg.sound.unwrap().command, "afplay");
}

#[test]
fn test_minimal_config_uses_defaults() {
    let json = r#"{
        "notification": { "check_interval_ms": 1000, "retry_interval_ms": 2000 },
        "events": { "json_file": "events.json" }
    }"#;
    let cfg = DaemonConfig::from_json_str(json).expect("minimal config");
    assert_eq!(cfg.format.time, "%H:%M");
    assert_eq!(cfg.notification.window_title, "Event Reminder");
    assert_eq!(cfg.notification.dismiss_after(), Duration::from_secs(60));
    assert!(cfg.logging.is_none());
    assert!(cfg.sound.is_none());
}

#[test]
fn test_refresh_interval_override() {
    let json = with(|v| v["notification"]["refresh_interval_ms"] = 5000.into());
    let cfg = DaemonConfig::from_json_str(&json).unwrap();
    assert_eq!(cfg.notification.refresh_interval(), Duration::from_secs(5));
}

#[test]
fn test_zero_intervals_rejected() {
    let json = with(|v| v["notification"]["check_interval_ms"] = 0.into());
    assert!(DaemonConfig::from_json_str(&json).is_err());

    let json = with(|v| v["notification"]["retry_interval_ms"] = 0.into());
    assert!(DaemonConfig::from_json_str(&json).is_err());

    let json = with(|v| v["notification"]["refresh_interval_ms"] = 0.into());
    assert!(DaemonConfig::from_json_str(&json).is_err());
}

#[test]
fn test_missing_sections_rejected() {
    let json = with(|v| {
        v.as_object_mut().unwrap().remove("events");
    });
    let err = DaemonConfig::from_json_str(&json).unwrap_err();
    assert!(err.starts_with("parse error"), "{err}");

    let json = with(|v| {
        v["notification"].as_object_mut().unwrap().remove("retry_interval_ms");
    });
    assert!(DaemonConfig::from_json_str(&json).is_err());
}

#[test]
fn test_bad_patterns_rejected() {
    let json = with(|v| v["format"]["time"] = "%Y".into());
    assert!(DaemonConfig::from_json_str(&json).is_err());

    let json = with(|v| v["format"]["datetime"] = "%Q".into());
    assert!(DaemonConfig::from_json_str(&json).is_err());
}

#[test]
fn test_empty_paths_rejected() {
    let json = with(|v| v["events"]["json_file"] = "".into());
    assert!(DaemonConfig::from_json_str(&json).is_err());

    let json = with(|v| v["logging"]["log_file"] = " ".into());
    assert!(DaemonConfig::from_json_str(&json).is_err());

    let json = with(|v| v["sound"]["command"] = "".into());
    assert!(DaemonConfig::from_json_str(&json).is_err());
}

#[test]
fn test_from_path_missing_file() {
    let err = DaemonConfig::from_path("/nonexistent/reminder.json").unwrap_err();
    assert!(err.contains("cannot read"), "{err}");
}
