//! `setTimeout`-backed scheduler for the debounced write-back.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use limn_editor_core::Scheduler;

/// Scheduler over the browser event loop. The returned `Timeout` handle
/// cancels the callback when dropped, which is exactly the debouncer's
/// cancellation contract.
#[derive(Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay.as_millis() as u32, move || task())
    }
}
