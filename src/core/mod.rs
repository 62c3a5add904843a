//! Core scheduling abstractions: events, next-event math, countdowns, the poll loop.

pub mod audit;
pub mod countdown;
pub mod error;
pub mod event;
pub mod next_event;
pub mod scheduler;
pub mod sink;
pub mod source;

pub use audit::{build_audit_event, AuditEvent, AuditSink, InMemoryAuditSink};
pub use countdown::{Countdown, Urgency};
pub use error::{AppResult, ReminderError};
pub use event::{Event, EventSet, TimeFormat};
pub use next_event::compute_next;
pub use scheduler::{PollIntervals, PollScheduler, PollState, Spawn, TickOutcome};
pub use sink::{Notification, NotificationSink};
pub use source::EventSource;
