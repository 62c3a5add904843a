//! Countdown rendering for an open notification.

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};

/// How a countdown should be styled by the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// The target is still ahead.
    Upcoming,
    /// The target has passed.
    Overdue,
    /// There is no target.
    Neutral,
}

/// Signed hours/minutes until the next event, or the absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// Time left until (or, when `overdue`, elapsed since) the target.
    Remaining {
        /// Whole hours of the absolute delta.
        hours: u64,
        /// Whole minutes left over after the hours; seconds are dropped.
        minutes: u64,
        /// The target lies before `now`.
        overdue: bool,
    },
    /// No next event.
    NoMoreEvents,
}

impl Countdown {
    /// Text shown when there is no next event.
    pub const NO_MORE_EVENTS: &'static str = "No more events today.";

    /// Countdown from `now` to `next`.
    ///
    /// Pure: a notification freezes `next` when it opens and calls this on
    /// every refresh with a fresh `now`.
    pub fn format(now: NaiveDateTime, next: Option<NaiveDateTime>) -> Self {
        let Some(next) = next else {
            return Self::NoMoreEvents;
        };
        let delta = next - now;
        let total = delta.num_seconds().unsigned_abs();
        Self::Remaining {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            overdue: delta < TimeDelta::zero(),
        }
    }

    /// True when the target has already passed.
    pub const fn is_overdue(&self) -> bool {
        matches!(self, Self::Remaining { overdue: true, .. })
    }

    /// Styling hint for the sink.
    pub const fn urgency(&self) -> Urgency {
        match self {
            Self::Remaining { overdue: true, .. } => Urgency::Overdue,
            Self::Remaining { overdue: false, .. } => Urgency::Upcoming,
            Self::NoMoreEvents => Urgency::Neutral,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining {
                hours,
                minutes,
                overdue,
            } => {
                let sign = if *overdue { "-" } else { "" };
                write!(f, "{sign}{hours:02}:{minutes:02}")
            }
            Self::NoMoreEvents => f.write_str(Self::NO_MORE_EVENTS),
        }
    }
}
