//! # Presentation timing for transient UI
//!
//! Two small state machines decide *when* short-lived UI deserves pixels:
//!
//! - [`DebouncedIndicator`] — shows an activity indicator only when the
//!   activity outlasts a debounce window (default 0.5 s), so fast
//!   operations never flash a spinner.
//! - [`DelayedReveal`] — mounts content only after its presentation signal
//!   has stayed true for a delay (default 4 s), and tears it down the
//!   instant the signal drops.
//!
//! Neither draws anything. Each exposes a rendered-state [`Signal<bool>`]
//! plus the [`Transition`] the host should animate with; what a "mount"
//! looks like is entirely the host's business.
//!
//! ## Debouncing a spinner
//!
//! ```rust
//! use std::rc::Rc;
//! use lull::{DebouncedIndicator, Duration, TestClock, set_clock, tick};
//!
//! let clock = TestClock::start_now();
//! set_clock(Rc::new(clock.clone()));
//!
//! let spinner = DebouncedIndicator::new(false);
//! spinner.set_indicating(true); // fetch started
//! assert!(!spinner.is_rendered()); // window still open
//!
//! clock.advance(Duration::from_millis(600));
//! tick();
//! assert!(spinner.is_rendered()); // still loading after 0.5 s: show it
//! ```
//!
//! A fetch that finishes inside the window never renders at all:
//!
//! ```rust
//! use lull::{DebouncedIndicator, Duration, TestClock, tick};
//!
//! let clock = TestClock::install();
//!
//! let spinner = DebouncedIndicator::new(false);
//! spinner.set_indicating(true);
//! clock.advance(Duration::from_millis(300));
//! tick();
//! spinner.set_indicating(false); // finished early
//! clock.advance(Duration::from_secs(1));
//! tick();
//! assert!(!spinner.is_rendered());
//! ```
//!
//! ## Delaying a reveal
//!
//! ```rust
//! use lull::{DelayedReveal, Duration, RevealOptions, TestClock, Transition, tick};
//!
//! let clock = TestClock::install();
//! let banner = DelayedReveal::with_options(
//!     false,
//!     RevealOptions {
//!         delay: Duration::from_secs(2),
//!         transition: Transition::OPACITY,
//!         skip_first: false,
//!     },
//! );
//!
//! banner.set_presented(true);
//! clock.advance(Duration::from_secs(2));
//! tick();
//! assert!(banner.is_rendered());
//!
//! banner.set_presented(false); // hides with no delay
//! assert!(!banner.is_rendered());
//! ```
//!
//! With the default options the *first* event mounts immediately
//! (skip-first): content that is already on screen when the machine comes
//! up should not blink out and fade back in.
//!
//! ## Driving time
//!
//! Everything is single-threaded and cooperative. Waits go through a
//! per-thread timer arena: the host calls [`tick`] once per frame (or
//! sleeps until [`next_deadline`]), and tests swap the wall clock for a
//! [`TestClock`] they advance by hand. Hosts attach via
//! [`observe`](DelayedReveal::observe) or poll
//! [`is_rendered`](DelayedReveal::is_rendered); either way, dropping a
//! machine cancels whatever wait it had in flight.

pub mod clock;
pub mod content;
pub mod debounce;
pub mod dispose;
pub mod reveal;
pub mod signal;
pub mod timer;
pub mod transition;

pub use clock::*;
pub use content::*;
pub use debounce::*;
pub use dispose::*;
pub use reveal::*;
pub use signal::*;
pub use timer::*;
pub use transition::*;

pub use web_time::{Duration, Instant};
