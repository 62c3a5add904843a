//! Tests for audit sink

use chrono::NaiveTime;
use event_reminder::core::{build_audit_event, AuditSink, Event, InMemoryAuditSink, TimeFormat};

#[test]
fn test_in_memory_audit_sink() {
    let sink = InMemoryAuditSink::new(10);
    let event = Event::new(NaiveTime::from_hms_opt(9, 30, 0).unwrap(), "Standup", "15m");
    let format = TimeFormat::default();

    sink.record(build_audit_event(
        "fired-1",
        "fired",
        Some((&event, &format)),
        Some("payload".to_string()),
    ));
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].event_id, "fired-1");
    assert_eq!(events[0].action, "fired");
    assert_eq!(events[0].event_time.as_deref(), Some("09:30"));
    assert_eq!(events[0].description.as_deref(), Some("Standup"));
}

#[test]
fn test_audit_sink_overflow() {
    let sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event("evt1", "source_error", None, None));
    sink.record(build_audit_event("evt2", "source_error", None, None));
    sink.record(build_audit_event("evt3", "fired", None, None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_id, "evt2"); // First one popped
    assert_eq!(events[1].event_id, "evt3");
    assert_eq!(sink.with_action("fired").len(), 1);
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event("evt1", "source_error", None, Some("disk".to_string()));

    assert_eq!(event.event_id, "evt1");
    assert_eq!(event.action, "source_error");
    assert_eq!(event.event_time, None);
    assert_eq!(event.description, None);
    assert_eq!(event.payload, Some("disk".to_string()));
    assert!(event.created_at_ms > 0);
}
