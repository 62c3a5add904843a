//! Infrastructure adapters for event sources and notification sinks.

pub mod sink;
pub mod source;
pub use sink::{ConsoleSink, RecordingSink};
pub use source::{InMemorySource, JsonFileSource};
