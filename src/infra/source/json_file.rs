//! JSON file event source.
//!
//! The file holds an array of records:
//!
//! ```json
//! [
//!   { "time": "09:30", "description": "Standup", "duration": "15m" },
//!   { "time": "14:00", "description": "Review" }
//! ]
//! ```
//!
//! The file is read on every fetch. A record that is not an object, lacks a
//! string `time`/`description`, or whose `time` does not parse with the
//! configured format is skipped with a warning; the remaining records are
//! still returned. An unreadable file or a top level that is not an array is
//! a read error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::core::{Event, EventSet, EventSource, ReminderError, TimeFormat};

/// Event source backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    format: TimeFormat,
}

#[derive(Deserialize)]
struct EventRecord {
    time: String,
    description: String,
    #[serde(default)]
    duration: Option<Value>,
}

impl JsonFileSource {
    /// Source reading `path`, parsing times with `format`.
    pub fn new(path: impl AsRef<Path>, format: TimeFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    /// File being read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse one record.
    fn parse_record(&self, index: usize, value: Value) -> Result<Event, ReminderError> {
        let malformed = |reason: String| ReminderError::MalformedRecord { index, reason };

        let record: EventRecord = serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;
        let time = self
            .format
            .parse(&record.time)
            .map_err(|e| malformed(format!("time `{}`: {e}", record.time)))?;
        let duration = match record.duration {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => return Err(malformed(format!("duration `{other}` is not a label"))),
        };

        Ok(Event::new(time, record.description, duration))
    }
}

impl EventSource for JsonFileSource {
    fn try_fetch(&self) -> Result<EventSet, ReminderError> {
        let input = std::fs::read_to_string(&self.path)
            .map_err(|e| ReminderError::SourceRead(format!("{}: {e}", self.path.display())))?;
        let records: Vec<Value> = serde_json::from_str(&input)
            .map_err(|e| ReminderError::SourceRead(format!("{}: {e}", self.path.display())))?;

        let events: EventSet = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match self.parse_record(index, value) {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "skipping record");
                    None
                }
            })
            .collect();

        Ok(events)
    }
}
