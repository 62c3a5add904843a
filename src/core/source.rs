//! Event source abstraction.

use crate::core::{EventSet, ReminderError};

/// Supplies the current event set on demand.
///
/// Every call reads afresh; implementations must not cache across calls, so
/// edits to the underlying list show up on the next tick.
pub trait EventSource: Send {
    /// Read the events, surfacing read failures.
    ///
    /// Individually malformed records are skipped, not reported here.
    fn try_fetch(&self) -> Result<EventSet, ReminderError>;

    /// Read the events, logging any failure and returning an empty set.
    fn fetch(&self) -> EventSet {
        self.try_fetch().unwrap_or_else(|e| {
            tracing::error!(error = %e, "error reading events");
            EventSet::empty()
        })
    }
}
