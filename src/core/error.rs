//! Error types for reminder operations.

use thiserror::Error;

/// Errors produced by reminder components.
///
/// None of these stop the poll loop. Only [`ReminderError::Config`] is fatal,
/// and only at startup.
#[derive(Debug, Error)]
pub enum ReminderError {
    /// The event source could not be read; the tick sees an empty set.
    #[error("source read error: {0}")]
    SourceRead(String),
    /// A single record could not be parsed and was skipped.
    #[error("malformed record #{index}: {reason}")]
    MalformedRecord {
        /// Position of the record in the source.
        index: usize,
        /// Parse failure detail.
        reason: String,
    },
    /// The notification sink failed to render a fired event.
    #[error("sink dispatch error: {0}")]
    SinkDispatch(String),
    /// Startup configuration is missing or invalid.
    #[error("config error: {0}")]
    Config(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
