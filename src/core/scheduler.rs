//! The poll loop: fetch, match, dispatch, reschedule.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::sync::watch;

use crate::core::{
    build_audit_event, AuditSink, Event, EventSet, EventSource, Notification, NotificationSink,
    TimeFormat,
};
use crate::util::clock::Clock;

/// Abstraction for spawning notification dispatch on a runtime.
pub trait Spawn {
    /// Spawn an async task that returns a future.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

fn stop_requested(shutdown: &watch::Receiver<bool>) -> bool {
    *shutdown.borrow()
}

/// Which delay regime the scheduler is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollState {
    /// Last tick found nothing; poll at the idle cadence.
    #[default]
    Retry,
    /// Last tick fired an event; poll at the check cadence.
    Check,
}

/// The two poll cadences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    /// Delay after a tick that fired an event.
    pub check: Duration,
    /// Delay after a tick that found nothing.
    pub retry: Duration,
}

impl PollIntervals {
    /// Build from the two delays.
    pub const fn new(check: Duration, retry: Duration) -> Self {
        Self { check, retry }
    }

    /// Delay that follows a tick ending in `state`.
    pub const fn delay_for(&self, state: PollState) -> Duration {
        match state {
            PollState::Check => self.check,
            PollState::Retry => self.retry,
        }
    }
}

/// Decision taken by one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// An event matched and was handed to the sink.
    Fired {
        /// The dispatched event.
        event: Event,
        /// Delay before the next tick.
        delay: Duration,
    },
    /// Nothing matched (or the source could not be read).
    Idle {
        /// Delay before the next tick.
        delay: Duration,
    },
}

impl TickOutcome {
    /// Delay before the next tick.
    pub const fn delay(&self) -> Duration {
        match self {
            Self::Fired { delay, .. } | Self::Idle { delay } => *delay,
        }
    }
}

/// Wall-clock poll scheduler.
///
/// Owns everything a tick needs: the event source, the sink, the spawner used
/// to isolate notifications, the clock, the time format, and the cadences.
/// Ticks never overlap; the next one is armed only after the current one has
/// decided.
pub struct PollScheduler<Src, S> {
    source: Src,
    sink: Arc<dyn NotificationSink>,
    spawner: S,
    clock: Arc<dyn Clock>,
    format: TimeFormat,
    intervals: PollIntervals,
    state: PollState,
    ticks: u64,
    audit: Option<Arc<dyn AuditSink>>,
}

impl<Src, S> PollScheduler<Src, S>
where
    Src: EventSource,
    S: Spawn,
{
    /// Create a scheduler from components.
    pub fn new(
        source: Src,
        sink: Arc<dyn NotificationSink>,
        spawner: S,
        clock: Arc<dyn Clock>,
        format: TimeFormat,
        intervals: PollIntervals,
    ) -> Self {
        Self {
            source,
            sink,
            spawner,
            clock,
            format,
            intervals,
            state: PollState::default(),
            ticks: 0,
            audit: None,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Current delay regime.
    pub const fn state(&self) -> PollState {
        self.state
    }

    /// Ticks run so far.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Configured cadences.
    pub const fn intervals(&self) -> PollIntervals {
        self.intervals
    }

    /// The event source.
    pub const fn source(&self) -> &Src {
        &self.source
    }

    /// Run one check cycle and return the decision.
    ///
    /// At most one event is dispatched per tick: the first in source order
    /// whose time renders the same as "now".
    pub fn tick(&mut self) -> TickOutcome {
        self.ticks += 1;
        let now = self.clock.now();
        let now_text = self.format.render(now.time());
        let events = self.load_events();

        let matched = events.first_match(&now_text, &self.format).cloned();
        if let Some(event) = matched {
            tracing::info!(time = %now_text, description = %event.description, "event matched");
            self.dispatch(event.clone(), events, now);
            self.state = PollState::Check;
            TickOutcome::Fired {
                event,
                delay: self.intervals.delay_for(PollState::Check),
            }
        } else {
            tracing::trace!(time = %now_text, events = events.len(), "no event due");
            self.state = PollState::Retry;
            TickOutcome::Idle {
                delay: self.intervals.delay_for(PollState::Retry),
            }
        }
    }

    /// Tick until `shutdown` turns true or its sender is dropped.
    ///
    /// Shutdown is observed between ticks; notifications already dispatched
    /// keep running on their own tasks. Returns the number of ticks run.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> u64 {
        tracing::info!(
            check = ?self.intervals.check,
            retry = ?self.intervals.retry,
            format = self.format.pattern(),
            "poll loop started"
        );

        'ticks: while !stop_requested(&shutdown) {
            let delay = self.tick().delay();
            let sleep = tokio::time::sleep(delay);
            tokio::pin!(sleep);
            loop {
                tokio::select! {
                    () = &mut sleep => break,
                    changed = shutdown.changed() => {
                        if changed.is_err() || stop_requested(&shutdown) {
                            break 'ticks;
                        }
                    }
                }
            }
        }

        tracing::info!(ticks = self.ticks, "poll loop stopped");
        self.ticks
    }

    fn load_events(&self) -> EventSet {
        match self.source.try_fetch() {
            Ok(events) => events,
            Err(e) => {
                tracing::error!(error = %e, "error reading events; treating as empty");
                self.record_audit("source_error", None, Some(e.to_string()));
                EventSet::empty()
            }
        }
    }

    /// Hand the event off to the sink on its own task.
    fn dispatch(&self, event: Event, snapshot: EventSet, now: NaiveDateTime) {
        let notification = Notification::new(event, snapshot, now);
        let id = notification.id;
        self.record_audit("fired", Some(&notification.event), Some(id.to_string()));

        let sink = Arc::clone(&self.sink);
        self.spawner.spawn(async move {
            tracing::debug!(notification = %id, "dispatching notification");
            if let Err(e) = sink.fire(notification).await {
                tracing::error!(notification = %id, error = %e, "notification failed");
            }
        });
    }

    fn record_audit(&self, action: &str, event: Option<&Event>, payload: Option<String>) {
        if let Some(audit) = &self.audit {
            audit.record(build_audit_event(
                format!("{action}-{}", self.ticks),
                action,
                event.map(|e| (e, &self.format)),
                payload,
            ));
        }
    }
}
