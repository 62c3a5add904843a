//! Notification sink abstraction.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::core::{Event, EventSet, ReminderError};

/// A fired event handed off to a sink.
///
/// Built once by the scheduler and moved into the dispatch task; nothing in
/// it is shared with the poll loop afterwards.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Identifier for log correlation.
    pub id: Uuid,
    /// The matched event.
    pub event: Event,
    /// The event set as fetched on the tick that matched.
    pub snapshot: EventSet,
    /// Clock reading of that tick.
    pub opened_at: NaiveDateTime,
}

impl Notification {
    /// Create a notification with a fresh id.
    pub fn new(event: Event, snapshot: EventSet, opened_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            event,
            snapshot,
            opened_at,
        }
    }
}

/// Renders fired events.
///
/// `fire` runs on its own task and may take as long as the notification stays
/// open; the scheduler never awaits it. The sink owns its countdown refresh,
/// its lifecycle, and any sound.
#[async_trait]
pub trait NotificationSink: Send + Sync + 'static {
    /// Show a notification until it is dismissed.
    async fn fire(&self, notification: Notification) -> Result<(), ReminderError>;
}
