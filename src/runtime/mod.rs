//! Runtime adapters: task spawning and shutdown signals.

pub mod shutdown;
pub mod tokio_spawner;

pub use shutdown::wait_for_shutdown_signal;
pub use tokio_spawner::TokioSpawner;
