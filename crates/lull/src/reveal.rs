use std::cell::RefCell;
use std::rc::Rc;

use web_time::Duration;

use crate::dispose::Dispose;
use crate::signal::Signal;
use crate::timer::{self, TimerHandle};
use crate::transition::Transition;

/// Timing policy for [`DelayedReveal`].
#[derive(Clone, Copy, Debug)]
pub struct RevealOptions {
    /// How long the presentation signal must stay true before content mounts.
    pub delay: Duration,
    /// Handed to the rendering host with every rendered-state change.
    pub transition: Transition,
    /// Mount immediately on the very first processed event, whatever the
    /// presentation value is. Consumed once; later events follow the delay.
    pub skip_first: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(4),
            transition: Transition::OPACITY,
            skip_first: true,
        }
    }
}

struct RevealState {
    /// Last processed presentation value. `None` until the mount event.
    last: Option<bool>,
    delay: Duration,
    transition: Transition,
    skip_first: bool,
    rendered: Signal<bool>,
    pending: Option<TimerHandle>,
}

enum Step {
    Mount,
    Unmount,
    Wait(Duration),
}

/// Defers mounting content until its presentation signal has been true for a
/// configured delay, and unmounts it the moment the signal turns false.
///
/// Construction counts as the first presentation event, so a machine built
/// with default options mounts immediately (skip-first) even when the signal
/// starts out false. Every later event supersedes whatever wait is in
/// flight: at most one wait is ever pending, and a wait that loses the race
/// with a newer event has no effect. Dropping the last handle cancels any
/// pending wait.
#[derive(Clone)]
pub struct DelayedReveal {
    inner: Rc<RefCell<RevealState>>,
}

impl DelayedReveal {
    /// Machine with the default policy: 4 s delay, opacity transition,
    /// skip-first enabled.
    pub fn new(is_presented: bool) -> Self {
        Self::with_options(is_presented, RevealOptions::default())
    }

    pub fn with_options(is_presented: bool, options: RevealOptions) -> Self {
        let this = Self {
            inner: Rc::new(RefCell::new(RevealState {
                last: None,
                delay: options.delay,
                transition: options.transition,
                skip_first: options.skip_first,
                rendered: Signal::new(false),
                pending: None,
            })),
        };
        Self::process(&this.inner, is_presented);
        this
    }

    /// Feed the next presentation value. Values equal to the last processed
    /// one are ignored; only edges drive the machine.
    pub fn set_presented(&self, is_presented: bool) {
        Self::process(&self.inner, is_presented);
    }

    fn process(inner: &Rc<RefCell<RevealState>>, value: bool) {
        let step = {
            let mut st = inner.borrow_mut();
            if st.last == Some(value) {
                return;
            }
            st.last = Some(value);
            // Supersede any in-flight wait before taking the new branch.
            st.pending = None;
            if st.skip_first {
                st.skip_first = false;
                log::debug!("first presentation event: mounting without delay");
                Step::Mount
            } else if value {
                Step::Wait(st.delay)
            } else {
                Step::Unmount
            }
        };

        match step {
            Step::Mount => Self::apply(inner, true),
            Step::Unmount => Self::apply(inner, false),
            Step::Wait(delay) => {
                let weak = Rc::downgrade(inner);
                let handle = timer::schedule(delay, move || {
                    if let Some(inner) = weak.upgrade() {
                        Self::finish_wait(&inner);
                    }
                });
                inner.borrow_mut().pending = Some(handle);
            }
        }
    }

    fn finish_wait(inner: &Rc<RefCell<RevealState>>) {
        {
            let mut st = inner.borrow_mut();
            st.pending = None;
            // The presentation value may have flipped since the wait was
            // scheduled; mount only if it is still true.
            if st.last != Some(true) {
                return;
            }
        }
        Self::apply(inner, true);
    }

    fn apply(inner: &Rc<RefCell<RevealState>>, rendered: bool) {
        let signal = {
            let st = inner.borrow();
            if st.rendered.get() == rendered {
                return;
            }
            st.rendered.clone()
        };
        signal.set(rendered);
    }

    /// Whether the wrapped content is currently mounted.
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

    /// True while a delayed mount is scheduled and not yet fired.
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

    /// Drive this machine from a presentation signal. The signal's current
    /// value is not re-processed; construction already consumed the mount
    /// event. Run the guard on unmount to stop forwarding.
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
