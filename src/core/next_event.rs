//! Next-event calculation.

use chrono::{Days, NaiveDateTime};

use crate::core::EventSet;

/// Datetime of the soonest event strictly after `now`.
///
/// Event times are anchored on `now`'s date. When every event has already
/// passed today, the earliest event of the set is anchored on the following
/// day. An empty set has no next event, and neither does a non-empty set
/// when the rollover day would fall past [`chrono::NaiveDate::MAX`].
///
/// Equal times resolve by source order (stable sort), so the first listed
/// event is the one reported.
pub fn compute_next(now: NaiveDateTime, events: &EventSet) -> Option<NaiveDateTime> {
    let sorted = events.sorted();
    let today = now.date();

    sorted
        .iter()
        .map(|event| today.and_time(event.time))
        .find(|candidate| *candidate > now)
        .or_else(|| {
            let earliest = sorted.first()?;
            let tomorrow = today.checked_add_days(Days::new(1))?;
            Some(tomorrow.and_time(earliest.time))
        })
}
