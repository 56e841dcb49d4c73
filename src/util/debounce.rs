#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Pure debounce model: repeated triggers collapse into one trailing fire.
///
/// The browser wrapper below schedules the fire with a real timer; this
/// struct carries the same semantics against an explicit clock so the
/// collapse behavior can be tested deterministically.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            deadline: None,
        }
    }

    /// Record a trigger at `now_ms`, replacing any pending deadline.
    pub fn trigger(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.wait_ms);
    }

    /// True once per burst: the deadline has passed and is consumed.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(feature = "hydrate")]
pub mod browser {
    //! Timer-backed debounce for DOM event listeners.

    use gloo_timers::callback::Timeout;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Wrap `callback` so bursts of calls collapse into a single trailing
    /// invocation `wait_ms` after the last one. Dropping a pending
    /// `Timeout` cancels it, which is what resets the window.
    pub fn debounce(wait_ms: u32, callback: impl Fn() + 'static) -> impl Fn() {
        let callback = Rc::new(callback);
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        move || {
            let callback = Rc::clone(&callback);
            let timeout = Timeout::new(wait_ms, move || callback());
            // Replacing the slot drops, and thereby cancels, any unfired
            // predecessor. Already-fired handles clear harmlessly.
            *pending.borrow_mut() = Some(timeout);
        }
    }
}
