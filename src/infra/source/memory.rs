//! In-memory event source.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::{Event, EventSet, EventSource, ReminderError};

struct State {
    events: Vec<Event>,
    failure: Option<String>,
    fetches: u64,
}

/// Replaceable in-memory event list for development/testing.
///
/// Clones share the same list, so a test can keep a handle and edit the
/// events (or inject a read failure) while a scheduler owns another.
#[derive(Clone)]
pub struct InMemorySource {
    state: Arc<Mutex<State>>,
}

impl InMemorySource {
    /// Create a source serving `events`.
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                events,
                failure: None,
                fetches: 0,
            })),
        }
    }

    /// Swap the event list.
    pub fn replace(&self, events: Vec<Event>) {
        self.state.lock().events = events;
    }

    /// Make every fetch fail with `reason` until [`InMemorySource::recover`].
    pub fn fail_with(&self, reason: impl Into<String>) {
        self.state.lock().failure = Some(reason.into());
    }

    /// Stop failing.
    pub fn recover(&self) {
        self.state.lock().failure = None;
    }

    /// Number of fetch attempts so far.
    pub fn fetches(&self) -> u64 {
        self.state.lock().fetches
    }
}

impl EventSource for InMemorySource {
    fn try_fetch(&self) -> Result<EventSet, ReminderError> {
        let mut state = self.state.lock();
        state.fetches += 1;
        if let Some(reason) = &state.failure {
            return Err(ReminderError::SourceRead(reason.clone()));
        }
        Ok(EventSet::new(state.events.clone()))
    }
}
