//! Notification sink backends.

pub mod console;
pub mod memory;

pub use console::{ConsoleSink, Palette};
pub use memory::RecordingSink;
