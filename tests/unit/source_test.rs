//! Tests for event source backends

use chrono::NaiveTime;
use event_reminder::core::{Event, EventSource, ReminderError};
use event_reminder::infra::InMemorySource;

fn event(h: u32, m: u32, name: &str) -> Event {
    Event::new(NaiveTime::from_hms_opt(h, m, 0).unwrap(), name, "")
}

#[test]
fn test_in_memory_source_serves_current_list() {
    let source = InMemorySource::new(vec![event(8, 0, "a")]);
    assert_eq!(source.fetch().len(), 1);

    let handle = source.clone();
    handle.replace(vec![event(8, 0, "a"), event(9, 0, "b")]);
    assert_eq!(source.fetch().len(), 2);
    assert_eq!(source.fetches(), 2);
}

#[test]
fn test_in_memory_source_failure_is_empty_on_fetch() {
    let source = InMemorySource::new(vec![event(8, 0, "a")]);
    source.fail_with("disk unplugged");

    assert!(matches!(source.try_fetch(), Err(ReminderError::SourceRead(_))));
    assert!(source.fetch().is_empty());

    source.recover();
    assert_eq!(source.fetch().len(), 1);
}
