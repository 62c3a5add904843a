//! Event model, per-tick event sets, and the time-of-day format.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveTime;

use crate::core::ReminderError;

/// A scheduled same-day reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Wall-clock time of day the event fires at.
    pub time: NaiveTime,
    /// What the event is about.
    pub description: String,
    /// Free-form duration label, displayed as-is.
    pub duration: String,
}

impl Event {
    /// Create an event.
    pub fn new(time: NaiveTime, description: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            time,
            description: description.into(),
            duration: duration.into(),
        }
    }

    /// `"{time} - {description} ({duration})"` rendered with `format`.
    pub fn headline(&self, format: &TimeFormat) -> String {
        format!(
            "{} - {} ({})",
            format.render(self.time),
            self.description,
            self.duration
        )
    }
}

/// Events as returned by one fetch, in source order.
///
/// Source order matters: the scheduler's match scan walks it as-is, while
/// next-event calculation works on the stable [`EventSet::sorted`] view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSet {
    events: Vec<Event>,
}

impl EventSet {
    /// Wrap events in source order.
    pub const fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// An empty set ("no events configured").
    pub const fn empty() -> Self {
        Self { events: Vec::new() }
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when no events are configured.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Events ordered by time of day; ties keep source order.
    pub fn sorted(&self) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events.iter().collect();
        sorted.sort_by_key(|event| event.time);
        sorted
    }

    /// First event, in source order, whose rendered time equals `now_text`.
    pub fn first_match(&self, now_text: &str, format: &TimeFormat) -> Option<&Event> {
        self.events
            .iter()
            .find(|event| format.render(event.time) == now_text)
    }
}

impl From<Vec<Event>> for EventSet {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}

impl FromIterator<Event> for EventSet {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EventSet {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// strftime-style pattern used both to parse event times and to match "now".
///
/// The pattern sets the match resolution: with `%H:%M` an event matches for
/// the whole minute, with `%H:%M:%S` only for one second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat {
    pattern: String,
}

impl TimeFormat {
    /// Hour and minute, the usual reminder resolution.
    pub const DEFAULT_PATTERN: &'static str = "%H:%M";

    /// Validate and wrap a pattern.
    ///
    /// The pattern must render a time of day and parse its own output back.
    pub fn new(pattern: impl Into<String>) -> Result<Self, ReminderError> {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            return Err(ReminderError::Config("time format must not be empty".into()));
        }
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ReminderError::Config(format!(
                "time format `{pattern}` has an invalid specifier"
            )));
        }

        let sample = NaiveTime::from_hms_opt(13, 45, 30).unwrap_or_default();
        let mut rendered = String::new();
        write!(rendered, "{}", sample.format(&pattern)).map_err(|_| {
            ReminderError::Config(format!("time format `{pattern}` cannot render a time of day"))
        })?;
        NaiveTime::parse_from_str(&rendered, &pattern).map_err(|e| {
            ReminderError::Config(format!("time format `{pattern}` does not round-trip: {e}"))
        })?;

        Ok(Self { pattern })
    }

    /// The raw strftime pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render a time of day.
    pub fn render(&self, time: NaiveTime) -> String {
        time.format(&self.pattern).to_string()
    }

    /// Parse a time of day.
    pub fn parse(&self, text: &str) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(text.trim(), &self.pattern)
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            pattern: Self::DEFAULT_PATTERN.to_string(),
        }
    }
}
