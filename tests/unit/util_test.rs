//! Tests for utility functions

use chrono::{NaiveDate, TimeDelta};
use event_reminder::util::{now_ms, Clock, ManualClock, SystemClock};

#[test]
fn test_manual_clock_moves_only_when_told() {
    let start = NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 0)
        .unwrap();
    let clock = ManualClock::new(start);
    assert_eq!(clock.now(), start);

    let shared = clock.clone();
    shared.advance(TimeDelta::minutes(2));
    assert_eq!(
        clock.now(),
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 1, 0)
            .unwrap()
    );

    clock.set(start);
    assert_eq!(shared.now(), start);
}

#[test]
fn test_system_clock_is_recent() {
    let now = SystemClock.now();
    assert!(now.and_utc().timestamp() > 1_600_000_000 - 86_400);
}

#[test]
fn test_now_ms() {
    assert!(now_ms() > 1_600_000_000_000);
}
