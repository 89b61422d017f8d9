//! Trailing-edge debouncing on browser timers.
//!
//! A [`Debouncer`] holds at most one pending timer and replaces it on every
//! call, so a burst collapses into one run `wait_ms` after the last call.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Runs `callback` once the calls stop for `wait_ms`.
///
/// Clones share the same pending timer.
#[derive(Clone)]
pub struct Debouncer {
    wait_ms: u32,
    callback: Rc<dyn Fn()>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(wait_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self { wait_ms, callback: Rc::new(callback), pending: Rc::new(RefCell::new(None)) }
    }

    /// Schedule the callback, cancelling any timer still pending.
    pub fn call(&self) {
        let callback = Rc::clone(&self.callback);
        let timeout = Timeout::new(self.wait_ms, move || callback());
        // Dropping the previous `Timeout` clears it.
        self.pending.replace(Some(timeout));
    }
}
