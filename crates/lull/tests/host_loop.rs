use std::cell::RefCell;
use std::rc::Rc;

use lull::{
    DebouncedIndicator, DelayedContent, DelayedReveal, Duration, IndicatorContent, RevealOptions,
    TestClock, Transition, pending_count, signal, tick,
};

/// Drive the arena the way a host frame loop would: advance, tick, repeat.
fn pump(clock: &TestClock, total: Duration, step: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        clock.advance(step);
        tick();
        elapsed += step;
    }
}

#[test]
fn fast_operation_never_mounts_an_indicator() {
    let clock = TestClock::install();
    let is_loading = signal(false);
    let spinner = DebouncedIndicator::new(is_loading.get());
    let _bind = spinner.bind(&is_loading);

    let mounts = Rc::new(RefCell::new(0));
    let m = mounts.clone();
    let _obs = spinner.observe(move |v, _| {
        if v {
            *m.borrow_mut() += 1;
        }
    });

    is_loading.set(true);
    pump(&clock, Duration::from_millis(300), Duration::from_millis(20));
    is_loading.set(false);
    pump(&clock, Duration::from_secs(2), Duration::from_millis(20));

    assert_eq!(*mounts.borrow(), 0);
    assert!(!spinner.is_rendered());
}

#[test]
fn slow_operation_mounts_spinner_then_banner() {
    let clock = TestClock::install();
    let events = Rc::new(RefCell::new(Vec::new()));

    let spinner = IndicatorContent::new("spinner", false);
    let banner = DelayedContent::with_options(
        "still working",
        false,
        RevealOptions {
            delay: Duration::from_secs(2),
            transition: Transition::OPACITY,
            skip_first: false,
        },
    );

    let e = events.clone();
    let _s = spinner.indicator().observe(move |v, _| {
        e.borrow_mut().push(if v { "spinner up" } else { "spinner down" });
    });
    let e = events.clone();
    let _b = banner.reveal().observe(move |v, _| {
        e.borrow_mut().push(if v { "banner up" } else { "banner down" });
    });

    spinner.set_indicating(true);
    banner.set_presented(true);
    pump(&clock, Duration::from_secs(3), Duration::from_millis(20));
    assert_eq!(spinner.visible(), Some(&"spinner"));
    assert_eq!(banner.visible(), Some(&"still working"));

    spinner.set_indicating(false);
    banner.set_presented(false);
    assert_eq!(
        *events.borrow(),
        vec!["spinner up", "banner up", "spinner down", "banner down"]
    );
}

#[test]
fn remount_starts_from_scratch() {
    let clock = TestClock::install();
    let spinner = DebouncedIndicator::new(false);
    spinner.set_indicating(true);
    clock.advance(Duration::from_millis(500));
    tick();
    assert!(spinner.is_rendered());
    drop(spinner);

    // A fresh machine starts hidden with no pending wait, even when built
    // while the operation is already running.
    let spinner = DebouncedIndicator::new(true);
    assert!(!spinner.is_rendered());
    assert_eq!(pending_count(), 0);
    clock.advance(Duration::from_secs(5));
    assert_eq!(tick(), 0);
    assert!(!spinner.is_rendered());
}

#[test]
fn reveal_bound_to_signal_honors_cancellation() {
    let clock = TestClock::install();
    let show_tip = signal(false);
    let tip = DelayedReveal::with_options(
        show_tip.get(),
        RevealOptions {
            delay: Duration::from_secs(4),
            transition: Transition::OPACITY,
            skip_first: false,
        },
    );
    let _bind = tip.bind(&show_tip);
    assert!(!tip.is_rendered());

    show_tip.set(true);
    pump(&clock, Duration::from_secs(1), Duration::from_millis(50));
    show_tip.set(false); // dismissed before it ever appeared
    pump(&clock, Duration::from_secs(10), Duration::from_millis(50));
    assert!(!tip.is_rendered());

    show_tip.set(true);
    pump(&clock, Duration::from_secs(4), Duration::from_millis(50));
    assert!(tip.is_rendered());
}
