//! Daemon configuration structures.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::{PollIntervals, TimeFormat};

/// Time patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// strftime pattern for event times and matching.
    #[serde(default = "default_time_format")]
    pub time: String,
    /// strftime pattern for log timestamps.
    #[serde(default = "default_datetime_format")]
    pub datetime: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            time: default_time_format(),
            datetime: default_datetime_format(),
        }
    }
}

/// Poll cadences and notification presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Delay after a tick that fired an event (ms).
    pub check_interval_ms: u64,
    /// Delay after a tick that found nothing (ms).
    pub retry_interval_ms: u64,
    /// Countdown refresh cadence of an open notification (ms); defaults to the check interval.
    #[serde(default)]
    pub refresh_interval_ms: Option<u64>,
    /// How long a console notification stays open (ms).
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
    /// Title line shown above each notification.
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Countdown color while the next event is ahead.
    #[serde(default = "default_active_color")]
    pub active_color: String,
    /// Countdown color once the next event has passed.
    #[serde(default = "default_inactive_color")]
    pub inactive_color: String,
}

/// Where events are read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// JSON file holding the event list.
    pub json_file: PathBuf,
}

/// Log file location and rotation sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory for the log file; created on startup.
    pub log_dir: PathBuf,
    /// Log file name inside `log_dir`.
    pub log_file: String,
    /// Roll over once the file would exceed this size; 0 disables rotation.
    pub max_bytes: u64,
    /// Number of rolled files kept; 0 disables rotation.
    pub backup_count: usize,
}

/// Sound played when a notification opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    /// Player program, e.g. `afplay` or `paplay`.
    pub command: String,
    /// Sound file passed to the player.
    pub file_path: PathBuf,
}

/// Root daemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Time patterns.
    #[serde(default)]
    pub format: FormatConfig,
    /// Cadences and presentation.
    pub notification: NotificationConfig,
    /// Event list location.
    pub events: EventsConfig,
    /// File logging; stderr only when absent.
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
    /// Notification sound; silent when absent.
    #[serde(default)]
    pub sound: Option<SoundConfig>,
}

fn default_time_format() -> String {
    TimeFormat::DEFAULT_PATTERN.to_string()
}

fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

const fn default_dismiss_after_ms() -> u64 {
    60_000
}

fn default_window_title() -> String {
    "Event Reminder".to_string()
}

fn default_active_color() -> String {
    "green".to_string()
}

fn default_inactive_color() -> String {
    "red".to_string()
}

impl NotificationConfig {
    /// Validate cadence values.
    pub fn validate(&self) -> Result<(), String> {
        if self.check_interval_ms == 0 {
            return Err("check_interval_ms must be greater than 0".into());
        }
        if self.retry_interval_ms == 0 {
            return Err("retry_interval_ms must be greater than 0".into());
        }
        if self.refresh_interval_ms == Some(0) {
            return Err("refresh_interval_ms must be greater than 0".into());
        }
        Ok(())
    }

    /// Both poll cadences.
    pub const fn poll_intervals(&self) -> PollIntervals {
        PollIntervals::new(
            Duration::from_millis(self.check_interval_ms),
            Duration::from_millis(self.retry_interval_ms),
        )
    }

    /// Countdown refresh cadence.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms.unwrap_or(self.check_interval_ms))
    }

    /// How long a notification stays open.
    pub const fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }
}

impl LoggingConfig {
    /// Validate log location.
    pub fn validate(&self) -> Result<(), String> {
        if self.log_dir.as_os_str().is_empty() {
            return Err("log_dir must not be empty".into());
        }
        if self.log_file.trim().is_empty() {
            return Err("log_file must not be empty".into());
        }
        Ok(())
    }

    /// Full path of the live log file.
    pub fn path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }
}

impl DaemonConfig {
    /// Validate all sections.
    pub fn validate(&self) -> Result<(), String> {
        TimeFormat::new(self.format.time.as_str()).map_err(|e| format!("format.time: {e}"))?;
        if StrftimeItems::new(&self.format.datetime).any(|item| matches!(item, Item::Error)) {
            return Err(format!(
                "format.datetime `{}` has an invalid specifier",
                self.format.datetime
            ));
        }
        self.notification
            .validate()
            .map_err(|e| format!("notification: {e}"))?;
        if self.events.json_file.as_os_str().is_empty() {
            return Err("events: json_file must not be empty".into());
        }
        if let Some(logging) = &self.logging {
            logging.validate().map_err(|e| format!("logging: {e}"))?;
        }
        if let Some(sound) = &self.sound {
            if sound.command.trim().is_empty() {
                return Err("sound: command must not be empty".into());
            }
        }
        Ok(())
    }

    /// The validated time format.
    pub fn time_format(&self) -> Result<TimeFormat, String> {
        TimeFormat::new(self.format.time.as_str()).map_err(|e| e.to_string())
    }

    /// Parse daemon configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse, and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        Self::from_json_str(&input)
    }
}
