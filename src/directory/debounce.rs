//! Cancellable single-slot debounce timer
//!
//! A [`Debouncer`] holds at most one pending timer. Scheduling new work
//! aborts whatever was pending, so a burst of calls runs the work exactly
//! once, after the burst has been quiet for the configured delay
//! (trailing-edge only).

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Single-slot trailing-edge debounce timer.
///
/// Dropping the debouncer aborts any pending timer, so scheduled work can
/// never fire against a torn-down owner.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet interval.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `work` to run after the quiet interval elapses.
    ///
    /// Any previously scheduled work that has not fired yet is cancelled;
    /// the interval restarts from this call.
    pub async fn schedule<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work.await;
        });

        let mut slot = self.pending.lock().await;
        if let Some(prev) = slot.replace(handle) {
            prev.abort();
        }
    }

    /// Cancel any pending timer without scheduling new work.
    pub async fn cancel(&self) {
        let mut slot = self.pending.lock().await;
        if let Some(prev) = slot.take() {
            prev.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}
