use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;

use stockpulse_core::timing::{DebounceGate, ThrottleGate};

struct DebounceInner<A> {
    gate: RefCell<DebounceGate>,
    timer: RefCell<Option<Timeout>>,
    func: Box<dyn Fn(A)>,
}

/// Trailing-edge debounced wrapper around `func`.
pub struct Debounced<A> {
    inner: Rc<DebounceInner<A>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: 'static> Debounced<A> {
    pub fn call(&self, args: A) {
        let ticket = self.inner.gate.borrow_mut().arm();
        let wait_ms = self.inner.gate.borrow().wait_ms();
        let weak: Weak<DebounceInner<A>> = Rc::downgrade(&self.inner);
        let timeout = Timeout::new(wait_ms, move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.gate.borrow_mut().fire(ticket) {
                (inner.func)(args);
            }
        });
        // Dropping the previous Timeout clears it.
        self.inner.timer.borrow_mut().replace(timeout);
    }

    pub fn cancel(&self) {
        self.inner.gate.borrow_mut().cancel();
        self.inner.timer.borrow_mut().take();
    }
}

pub fn debounce<A, F>(func: F, wait_ms: u32) -> Debounced<A>
where
    A: 'static,
    F: Fn(A) + 'static,
{
    Debounced {
        inner: Rc::new(DebounceInner {
            gate: RefCell::new(DebounceGate::new(wait_ms)),
            timer: RefCell::new(None),
            func: Box::new(func),
        }),
    }
}

/// Monotonic milliseconds from `performance.now()`. Wall-clock time is only
/// used where no `Performance` object exists.
fn monotonic_now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Leading-edge throttled wrapper around `func`.
pub struct Throttled<A> {
    gate: Rc<RefCell<ThrottleGate>>,
    func: Rc<dyn Fn(A)>,
}

impl<A> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
            func: self.func.clone(),
        }
    }
}

impl<A> Throttled<A> {
    pub fn call(&self, args: A) {
        let accepted = self.gate.borrow_mut().try_pass(monotonic_now_ms());
        if accepted {
            (self.func)(args);
        }
    }
}

pub fn throttle<A, F>(func: F, limit_ms: u32) -> Throttled<A>
where
    F: Fn(A) + 'static,
{
    Throttled {
        gate: Rc::new(RefCell::new(ThrottleGate::new(limit_ms))),
        func: Rc::new(func),
    }
}
