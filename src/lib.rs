//! # Event Reminder
//!
//! A wall-clock reminder daemon for a personal list of same-day events.
//!
//! The daemon reads a list of events (time of day, description, duration label),
//! polls the local clock, and hands an event to a notification sink when the
//! current time of day matches the event's time. The event list is re-read on
//! every tick, so edits to the source take effect without a restart.
//!
//! ## Core Pieces
//!
//! - **`EventSource`**: supplies a fresh `EventSet` per tick; read failures become an empty set
//! - **`compute_next`**: the next event strictly after "now", rolling over to tomorrow's earliest
//! - **`Countdown`**: signed `HH:MM` countdown with an urgency flag for the sink to style
//! - **`PollScheduler`**: the tick loop, with a short cadence after a match and an idle cadence otherwise
//! - **`NotificationSink`**: renders a fired event on its own task, never blocking the loop
//!
//! ## Running a Scheduler
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use event_reminder::core::{PollIntervals, PollScheduler, TimeFormat};
//! use event_reminder::infra::{source::InMemorySource, sink::RecordingSink};
//! use event_reminder::runtime::TokioSpawner;
//! use event_reminder::util::SystemClock;
//!
//! let scheduler = PollScheduler::new(
//!     InMemorySource::new(events),
//!     Arc::new(RecordingSink::new()),
//!     TokioSpawner::new(tokio::runtime::Handle::current()),
//!     Arc::new(SystemClock),
//!     TimeFormat::default(),
//!     PollIntervals::new(Duration::from_secs(30), Duration::from_secs(30)),
//! );
//!
//! let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
//! let handle = tokio::spawn(scheduler.run(stop_rx));
//! // ...
//! stop_tx.send(true)?;
//! handle.await?;
//! ```
//!
//! For complete scenarios, see `tests/scheduler_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: events, next-event math, countdowns, the poll loop.
pub mod core;
/// Configuration models for the daemon, its cadences, and log rotation.
pub mod config;
/// Builders to construct daemon components from configuration.
pub mod builders;
/// Infrastructure adapters for event sources and notification sinks.
pub mod infra;
/// Runtime adapters: task spawning and shutdown signals.
pub mod runtime;
/// Shared utilities: clocks and telemetry.
pub mod util;
