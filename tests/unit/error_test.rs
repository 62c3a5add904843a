//! Tests for error types

use event_reminder::core::ReminderError;

#[test]
fn test_source_read_error() {
    let err = ReminderError::SourceRead("events.json: not found".to_string());
    assert_eq!(format!("{}", err), "source read error: events.json: not found");
}

#[test]
fn test_malformed_record_error() {
    let err = ReminderError::MalformedRecord {
        index: 3,
        reason: "missing field `time`".to_string(),
    };
    assert_eq!(format!("{}", err), "malformed record #3: missing field `time`");
}

#[test]
fn test_sink_dispatch_error() {
    let err = ReminderError::SinkDispatch("stdout closed".to_string());
    assert_eq!(format!("{}", err), "sink dispatch error: stdout closed");
}

#[test]
fn test_config_error() {
    let err = ReminderError::Config("missing events".to_string());
    assert_eq!(format!("{}", err), "config error: missing events");
}
