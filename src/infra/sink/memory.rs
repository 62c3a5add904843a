//! In-memory notification sink.

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::core::{Notification, NotificationSink, ReminderError};

/// Sink that records every notification it is handed.
///
/// Used in tests and as a headless sink; optionally fails every dispatch to
/// exercise error isolation.
pub struct RecordingSink {
    fired: Mutex<Vec<Notification>>,
    failure: Option<String>,
    notify: Notify,
}

impl RecordingSink {
    /// Create a sink that accepts every notification.
    pub fn new() -> Self {
        Self {
            fired: Mutex::new(Vec::new()),
            failure: None,
            notify: Notify::new(),
        }
    }

    /// Create a sink that records, then fails, every notification.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new()
        }
    }

    /// Notifications received so far.
    pub fn fired(&self) -> Vec<Notification> {
        self.fired.lock().clone()
    }

    /// Number of notifications received so far.
    pub fn len(&self) -> usize {
        self.fired.lock().len()
    }

    /// True when nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.fired.lock().is_empty()
    }

    /// Wait until at least `count` notifications have arrived.
    pub async fn wait_for(&self, count: usize) -> Vec<Notification> {
        loop {
            let notified = self.notify.notified();
            if self.len() >= count {
                return self.fired();
            }
            notified.await;
        }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn fire(&self, notification: Notification) -> Result<(), ReminderError> {
        tracing::debug!(notification = %notification.id, "recording notification");
        self.fired.lock().push(notification);
        self.notify.notify_one();
        match &self.failure {
            Some(reason) => Err(ReminderError::SinkDispatch(reason.clone())),
            None => Ok(()),
        }
    }
}
