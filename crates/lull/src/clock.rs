use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::{Duration, Instant};

/// Time source behind every deferred mount.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time. Installed by default.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

thread_local! {
    static CLOCK: RefCell<Rc<dyn Clock>> = RefCell::new(Rc::new(SystemClock));
}

/// Install a clock for the current thread. Hosts keep the default
/// `SystemClock`; tests install a [`TestClock`] they advance by hand.
pub fn set_clock(clock: Rc<dyn Clock>) {
    CLOCK.with(|c| *c.borrow_mut() = clock);
}

pub(crate) fn now() -> Instant {
    CLOCK.with(|c| c.borrow().now())
}

/// A test clock you can drive deterministically. Clones share one cell, so
/// the handle kept by a test moves the copy installed with [`set_clock`].
#[derive(Clone)]
pub struct TestClock {
    t: Rc<Cell<Instant>>,
}

impl TestClock {
    pub fn start_now() -> Self {
        Self {
            t: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Create a clock, install it for the current thread, and return the
    /// handle that drives it.
    pub fn install() -> Self {
        let clock = Self::start_now();
        set_clock(Rc::new(clock.clone()));
        clock
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }

    pub fn now(&self) -> Instant {
        self.t.get()
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}
