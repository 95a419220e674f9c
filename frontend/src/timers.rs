//! Timer scheduling behind a small trait so debounce, throttle and the
//! subscription delay can run against a manual clock in tests.

use gloo_timers::callback::Timeout;

/// Runs a task after a delay.
pub trait Scheduler {
    /// Dropping the handle cancels the task if it has not fired yet.
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Like [`Scheduler::schedule`], but the task can't be cancelled.
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// `setTimeout` through gloo.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
