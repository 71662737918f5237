use std::cell::RefCell;
use std::rc::Rc;

use web_time::Duration;

use crate::dispose::Dispose;
use crate::signal::Signal;
use crate::timer::{self, TimerHandle};
use crate::transition::Transition;

/// Timing policy for [`DebouncedIndicator`].
#[derive(Clone, Copy, Debug)]
pub struct IndicatorOptions {
    /// How long activity must persist before the indicator mounts.
    pub delay: Duration,
    /// Handed to the rendering host with every rendered-state change.
    pub transition: Transition,
}

impl Default for IndicatorOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
            transition: Transition::SCALE.combined(Transition::OPACITY),
        }
    }
}

struct IndicatorState {
    /// Last observed activity value. Seeded at construction; only changes
    /// away from it drive the machine.
    last: bool,
    delay: Duration,
    transition: Transition,
    rendered: Signal<bool>,
    pending: Option<TimerHandle>,
}

/// Shows an activity indicator only when the activity outlasts a debounce
/// window, so operations that finish quickly never flash one.
///
/// The machine watches an activity flag. A rising edge starts a wait; if the
/// flag is still up when the wait completes, the indicator mounts. A falling
/// edge cancels any wait and unmounts at once. The construction value is
/// recorded but not acted on, so a machine built while activity is already
/// up stays hidden until the flag drops and rises again. Dropping the last
/// handle cancels any pending wait.
#[derive(Clone)]
pub struct DebouncedIndicator {
    inner: Rc<RefCell<IndicatorState>>,
}

impl DebouncedIndicator {
    /// Machine with the default policy: 0.5 s window, scale-with-opacity
    /// transition.
    pub fn new(is_indicating: bool) -> Self {
        Self::with_options(is_indicating, IndicatorOptions::default())
    }

    pub fn with_options(is_indicating: bool, options: IndicatorOptions) -> Self {
        Self {
            inner: Rc::new(RefCell::new(IndicatorState {
                last: is_indicating,
                delay: options.delay,
                transition: options.transition,
                rendered: Signal::new(false),
                pending: None,
            })),
        }
    }

    /// Feed the next activity value. Values equal to the last observed one
    /// are ignored; only edges drive the machine.
    pub fn set_indicating(&self, is_indicating: bool) {
        Self::process(&self.inner, is_indicating);
    }

    fn process(inner: &Rc<RefCell<IndicatorState>>, value: bool) {
        let wait = {
            let mut st = inner.borrow_mut();
            if st.last == value {
                return;
            }
            st.last = value;
            let had_wait = st.pending.take().is_some();
            if value {
                Some(st.delay)
            } else {
                if had_wait {
                    log::debug!("activity ended inside the debounce window; indicator stays hidden");
                }
                None
            }
        };

        match wait {
            Some(delay) => {
                let weak = Rc::downgrade(inner);
                let handle = timer::schedule(delay, move || {
                    if let Some(inner) = weak.upgrade() {
                        Self::finish_wait(&inner);
                    }
                });
                inner.borrow_mut().pending = Some(handle);
            }
            None => Self::apply(inner, false),
        }
    }

    fn finish_wait(inner: &Rc<RefCell<IndicatorState>>) {
        // A falling edge would have cancelled this wait synchronously, so
        // completing at all means activity persisted through the window.
        inner.borrow_mut().pending = None;
        Self::apply(inner, true);
    }

    fn apply(inner: &Rc<RefCell<IndicatorState>>, rendered: bool) {
        let signal = {
            let st = inner.borrow();
            if st.rendered.get() == rendered {
                return;
            }
            st.rendered.clone()
        };
        signal.set(rendered);
    }

    /// Whether the indicator is currently mounted.
    pub fn is_rendered(&self) -> bool {
        self.inner.borrow().rendered.get()
    }

    /// The rendered-state signal. Subscribers see mount and unmount edges;
    /// read [`is_rendered`](Self::is_rendered) for the value at attach time.
    pub fn rendered(&self) -> Signal<bool> {
        self.inner.borrow().rendered.clone()
    }

    pub fn transition(&self) -> Transition {
        self.inner.borrow().transition
    }

    /// True while a debounce wait is scheduled and not yet fired.
    pub fn is_waiting(&self) -> bool {
        self.inner
            .borrow()
            .pending
            .as_ref()
            .is_some_and(|h| h.is_pending())
    }

    /// Notify the rendering host of every rendered-state change, paired with
    /// the transition to animate it with. Run the guard on unmount.
    pub fn observe(&self, f: impl Fn(bool, Transition) + 'static) -> Dispose {
        let transition = self.transition();
        let rendered = self.rendered();
        let id = rendered.subscribe(move |v| f(*v, transition));
        Dispose::new(move || rendered.unsubscribe(id))
    }

    /// Drive this machine from an activity signal. Only changes after
    /// attachment are forwarded; the current value is not re-processed. Run
    /// the guard on unmount to stop forwarding.
    pub fn bind(&self, source: &Signal<bool>) -> Dispose {
        let weak = Rc::downgrade(&self.inner);
        let id = source.subscribe(move |v| {
            if let Some(inner) = weak.upgrade() {
                Self::process(&inner, *v);
            }
        });
        let source = source.clone();
        Dispose::new(move || source.unsubscribe(id))
    }
}
