//! Cancellable single-shot timer
//!
//! Every `schedule` call aborts whatever is still pending and arms a new
//! timer, so only the most recently scheduled action ever runs.

use std::time::Duration;
use tokio::task::JoinHandle;

pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Run `action` once `delay` has passed without another `schedule` or
    /// `cancel`. Outside a tokio runtime the action runs immediately.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No runtime for debounced action, running it now");
            action();
            return;
        };

        let delay = self.delay;
        self.pending = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Drop the pending action, if any. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(task) => {
                let waiting = !task.is_finished();
                task.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
