//! Tokio runtime spawner implementation.

use std::future::Future;

use tokio_util::task::TaskTracker;

use crate::core::Spawn;

/// Tokio-based spawner that runs notifications as tasks on a tokio runtime.
///
/// Each dispatched notification gets its own task, so a sink that blocks on
/// its refresh loop never delays the poll loop. Tasks are tracked so a
/// shutting-down process can let open notifications finish with [`drain`].
///
/// [`drain`]: TokioSpawner::drain
#[derive(Clone)]
pub struct TokioSpawner {
    handle: tokio::runtime::Handle,
    tracker: TaskTracker,
}

impl TokioSpawner {
    /// Create a new TokioSpawner from a tokio runtime handle.
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle,
            tracker: TaskTracker::new(),
        }
    }

    /// Spawner on the runtime driving the caller.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }

    /// Notification tasks still running.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    /// Wait for every spawned task to complete.
    ///
    /// Clones share the same tracker, so draining one clone waits for tasks
    /// spawned through any of them.
    pub async fn drain(&self) {
        self.tracker.close();
        self.tracker.wait().await;
    }
}

impl Spawn for TokioSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tracker.spawn_on(fut, &self.handle);
    }
}
