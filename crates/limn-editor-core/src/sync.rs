//! Debounced write-back scheduling.
//!
//! Every content-change event on the live surface schedules a write-back
//! after a quiescence window; a new event before the window elapses cancels
//! and restarts the timer, so only the last event in a burst fires. The task
//! runs when the timer fires and reads surface state at that moment, so
//! later edits inside the window are included, never lost.

use std::time::Duration;

/// Quiescence window for write-back after live-surface edits.
pub const WRITE_BACK_DELAY: Duration = Duration::from_millis(500);

/// A cancellable deferred-task facility.
///
/// `schedule` returns a handle; dropping the handle before the delay elapses
/// cancels the task. The browser implementation is a `setTimeout` wrapper,
/// tests drive a manual queue.
pub trait Scheduler {
    type Handle;

    /// Run `task` after `delay`, unless the returned handle is dropped first.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Coalesces a burst of triggers into one scheduled task.
///
/// Holds at most one pending handle; scheduling again drops the previous
/// handle, which cancels it (last-writer-wins within the window).
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    /// A debouncer with the standard write-back delay.
    pub fn new(scheduler: S) -> Self {
        Self::with_delay(scheduler, WRITE_BACK_DELAY)
    }

    pub fn with_delay(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: None,
        }
    }

    /// Schedule `task`, cancelling any previously pending task.
    pub fn poke(&mut self, task: impl FnOnce() + 'static) {
        tracing::trace!(delay_ms = self.delay.as_millis() as u64, "debounce restart");
        let handle = self.scheduler.schedule(self.delay, Box::new(task));
        self.pending = Some(handle);
    }

    /// Drop the pending task without running it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
