//! Configuration models for the daemon, its cadences, and log rotation.

pub mod daemon;

pub use daemon::{
    DaemonConfig, EventsConfig, FormatConfig, LoggingConfig, NotificationConfig, SoundConfig,
};
