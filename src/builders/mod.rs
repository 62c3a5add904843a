//! Builders to construct daemon components from configuration.

pub mod daemon_builder;

pub use daemon_builder::{build_console_scheduler, build_scheduler};
