//! Terminal notification sink.
//!
//! Prints the fired event with a countdown to the next one and reprints the
//! countdown at the refresh cadence until the notification is dismissed. The
//! next-event target is computed once when the notification opens; only "now"
//! moves on each refresh.

use std::io::Write;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::{DaemonConfig, SoundConfig};
use crate::core::{
    compute_next, Countdown, Event, Notification, NotificationSink, ReminderError, TimeFormat,
    Urgency,
};
use crate::util::clock::Clock;

/// Countdown colors by urgency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Color while the next event is ahead.
    pub active: String,
    /// Color once the next event has passed.
    pub inactive: String,
}

impl Palette {
    /// ANSI escape for `urgency`, if the color name is known.
    pub fn escape(&self, urgency: Urgency) -> Option<&'static str> {
        match urgency {
            Urgency::Upcoming => ansi_code(&self.active),
            Urgency::Overdue => ansi_code(&self.inactive),
            Urgency::Neutral => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            active: "green".into(),
            inactive: "red".into(),
        }
    }
}

fn ansi_code(color: &str) -> Option<&'static str> {
    match color.to_ascii_lowercase().as_str() {
        "black" => Some("\x1b[30m"),
        "red" => Some("\x1b[31m"),
        "green" => Some("\x1b[32m"),
        "yellow" => Some("\x1b[33m"),
        "blue" => Some("\x1b[34m"),
        "magenta" => Some("\x1b[35m"),
        "cyan" => Some("\x1b[36m"),
        "white" => Some("\x1b[37m"),
        _ => None,
    }
}

const RESET: &str = "\x1b[0m";

enum Output {
    Stdout,
    Buffer(Arc<Mutex<Vec<u8>>>),
}

/// One redraw of an open notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Countdown shown in this redraw.
    pub countdown: Countdown,
    /// Text written to the terminal, color escapes included.
    pub text: String,
}

/// Sink printing notifications to stdout.
pub struct ConsoleSink {
    output: Output,
    format: TimeFormat,
    clock: Arc<dyn Clock>,
    refresh: Duration,
    dismiss_after: Duration,
    title: String,
    palette: Palette,
    sound: Option<SoundConfig>,
}

impl ConsoleSink {
    /// Sink refreshing every `refresh` until `dismiss_after` has elapsed.
    pub fn new(
        format: TimeFormat,
        clock: Arc<dyn Clock>,
        refresh: Duration,
        dismiss_after: Duration,
    ) -> Self {
        Self {
            output: Output::Stdout,
            format,
            clock,
            refresh,
            dismiss_after,
            title: "Event Reminder".into(),
            palette: Palette::default(),
            sound: None,
        }
    }

    /// Build from the daemon configuration.
    pub fn from_config(cfg: &DaemonConfig, clock: Arc<dyn Clock>) -> Result<Self, ReminderError> {
        let format = cfg.time_format().map_err(ReminderError::Config)?;
        let notification = &cfg.notification;
        let mut sink = Self::new(
            format,
            clock,
            notification.refresh_interval(),
            notification.dismiss_after(),
        )
        .with_title(notification.window_title.clone())
        .with_palette(Palette {
            active: notification.active_color.clone(),
            inactive: notification.inactive_color.clone(),
        });
        if let Some(sound) = &cfg.sound {
            sink = sink.with_sound(sound.clone());
        }
        Ok(sink)
    }

    /// Set the title line.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set countdown colors.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Play a sound when a notification opens.
    #[must_use]
    pub fn with_sound(mut self, sound: SoundConfig) -> Self {
        self.sound = Some(sound);
        self
    }

    /// Write frames into `buffer` instead of stdout.
    #[must_use]
    pub fn capture_into(mut self, buffer: Arc<Mutex<Vec<u8>>>) -> Self {
        self.output = Output::Buffer(buffer);
        self
    }

    /// Plain-text body for `event` with `countdown`.
    pub fn render(&self, event: &Event, countdown: &Countdown) -> String {
        match countdown {
            Countdown::NoMoreEvents => format!(
                "{} ({})\n{}",
                event.description, event.duration, Countdown::NO_MORE_EVENTS
            ),
            Countdown::Remaining { .. } => format!(
                "{}\n{countdown} until the next event.",
                event.headline(&self.format)
            ),
        }
    }

    /// Redraw for `event` at `now`, counting down to the `next` target.
    pub fn refresh_frame(
        &self,
        event: &Event,
        now: NaiveDateTime,
        next: Option<NaiveDateTime>,
    ) -> Frame {
        let countdown = Countdown::format(now, next);
        let body = self.render(event, &countdown);
        let text = match self.palette.escape(countdown.urgency()) {
            Some(color) => format!("[{}]\n{color}{body}{RESET}\n", self.title),
            None => format!("[{}]\n{body}\n", self.title),
        };
        Frame { countdown, text }
    }

    fn show(&self, frame: &Frame) -> Result<(), ReminderError> {
        match &self.output {
            Output::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(frame.text.as_bytes())
                    .and_then(|()| out.flush())
                    .map_err(|e| ReminderError::SinkDispatch(format!("stdout: {e}")))
            }
            Output::Buffer(buffer) => {
                buffer.lock().extend_from_slice(frame.text.as_bytes());
                Ok(())
            }
        }
    }
}

fn play_sound(sound: &SoundConfig) {
    let spawned = tokio::process::Command::new(&sound.command)
        .arg(&sound.file_path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    match spawned {
        Ok(mut child) => {
            let command = sound.command.clone();
            tokio::spawn(async move {
                match child.wait().await {
                    Ok(status) if !status.success() => {
                        tracing::warn!(%command, %status, "sound player exited with failure");
                    }
                    Err(e) => tracing::warn!(%command, error = %e, "sound player wait failed"),
                    Ok(_) => {}
                }
            });
        }
        Err(e) => tracing::warn!(command = %sound.command, error = %e, "cannot start sound player"),
    }
}

#[async_trait]
impl NotificationSink for ConsoleSink {
    async fn fire(&self, notification: Notification) -> Result<(), ReminderError> {
        let event = &notification.event;
        let next = compute_next(notification.opened_at, &notification.snapshot);

        if let Some(sound) = &self.sound {
            play_sound(sound);
        }
        tracing::info!(
            notification = %notification.id,
            "Event displayed: {} ({})",
            event.description,
            event.duration
        );

        let opened = Instant::now();
        let mut refresh = tokio::time::interval(self.refresh.max(Duration::from_millis(1)));
        refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            refresh.tick().await;
            let frame = self.refresh_frame(event, self.clock.now(), next);
            self.show(&frame)?;
            if opened.elapsed() >= self.dismiss_after {
                break;
            }
        }

        tracing::debug!(notification = %notification.id, "notification dismissed");
        Ok(())
    }
}
