use std::cell::RefCell;
use std::rc::Rc;

use crate::timers::{BrowserScheduler, Scheduler};

/// Collapses a burst of calls into one, fired `wait_ms` after the last call
/// with that call's arguments.
pub struct Debounce<A, S: Scheduler = BrowserScheduler> {
    func: Rc<dyn Fn(A)>,
    wait_ms: u32,
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
}

/// Browser-timer debounce.
pub fn debounce<A: 'static>(func: impl Fn(A) + 'static, wait_ms: u32) -> Debounce<A> {
    Debounce::with_scheduler(func, wait_ms, BrowserScheduler)
}

impl<A: 'static, S: Scheduler> Debounce<A, S> {
    pub fn with_scheduler(func: impl Fn(A) + 'static, wait_ms: u32, scheduler: S) -> Self {
        Self {
            func: Rc::new(func),
            wait_ms,
            scheduler,
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, args: A) {
        let func = Rc::clone(&self.func);
        let handle = self
            .scheduler
            .schedule(self.wait_ms, Box::new(move || func(args)));
        // The replaced handle is dropped here, which clears its timer.
        self.pending.replace(Some(handle));
    }

    /// Drops the pending call, if any.
    pub fn cancel(&self) {
        self.pending.take();
    }
}
