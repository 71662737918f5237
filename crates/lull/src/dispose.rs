use std::cell::RefCell;
use std::rc::Rc;

/// Cleanup guard returned by [`bind`](crate::DelayedReveal::bind) and
/// [`observe`](crate::DelayedReveal::observe). Run it when the owning
/// component unmounts.
#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        if let Some(f) = self.0.borrow_mut().take() {
            f()
        }
    }

    /// Fold another guard into this one, so a single `run` tears both down.
    pub fn and(self, other: Dispose) -> Dispose {
        Dispose::new(move || {
            self.run();
            other.run();
        })
    }
}
