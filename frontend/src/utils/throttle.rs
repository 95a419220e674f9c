use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::timers::{BrowserScheduler, Scheduler};

/// Leading-edge throttle: the first call runs right away, then calls are
/// dropped until `limit_ms` has passed. There is no trailing call.
pub struct Throttle<A, S: Scheduler = BrowserScheduler> {
    func: Box<dyn Fn(A)>,
    limit_ms: u32,
    scheduler: S,
    in_throttle: Rc<Cell<bool>>,
    reset: RefCell<Option<S::Handle>>,
}

/// Browser-timer throttle.
pub fn throttle<A: 'static>(func: impl Fn(A) + 'static, limit_ms: u32) -> Throttle<A> {
    Throttle::with_scheduler(func, limit_ms, BrowserScheduler)
}

impl<A, S: Scheduler> Throttle<A, S> {
    pub fn with_scheduler(func: impl Fn(A) + 'static, limit_ms: u32, scheduler: S) -> Self {
        Self {
            func: Box::new(func),
            limit_ms,
            scheduler,
            in_throttle: Rc::new(Cell::new(false)),
            reset: RefCell::new(None),
        }
    }

    /// Returns whether the call went through.
    pub fn call(&self, args: A) -> bool {
        if self.in_throttle.get() {
            return false;
        }
        self.in_throttle.set(true);
        (self.func)(args);

        let in_throttle = Rc::clone(&self.in_throttle);
        let handle = self
            .scheduler
            .schedule(self.limit_ms, Box::new(move || in_throttle.set(false)));
        self.reset.replace(Some(handle));
        true
    }
}
