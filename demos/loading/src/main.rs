use std::thread;

use lull::{
    DelayedContent, Duration, IndicatorContent, Instant, RevealOptions, Transition, next_deadline,
    tick,
};

const FRAME: Duration = Duration::from_millis(20);

/// Simulate one fetch of the given length against the wall clock, with a
/// debounced spinner plus a slower "still working" banner attached.
fn run_fetch(label: &str, takes: Duration) {
    let spinner = IndicatorContent::new("spinner", false);
    let banner = DelayedContent::with_options(
        "still working, hang tight",
        false,
        RevealOptions {
            delay: Duration::from_secs(2),
            transition: Transition::OPACITY,
            skip_first: false,
        },
    );

    let name = label.to_owned();
    let _spin_obs = spinner.indicator().observe(move |v, t| {
        if v {
            log::info!("[{name}] spinner mounted ({t:?})");
        } else {
            log::info!("[{name}] spinner unmounted");
        }
    });
    let name = label.to_owned();
    let _banner_obs = banner.reveal().observe(move |v, _| {
        if v {
            log::info!("[{name}] banner mounted: still working, hang tight");
        } else {
            log::info!("[{name}] banner unmounted");
        }
    });

    let started = Instant::now();
    spinner.set_indicating(true);
    banner.set_presented(true);

    while started.elapsed() < takes {
        let sleep_for = match next_deadline() {
            Some(d) => d.saturating_duration_since(Instant::now()).min(FRAME),
            None => FRAME,
        };
        thread::sleep(sleep_for);
        tick();
    }

    spinner.set_indicating(false);
    banner.set_presented(false);
    log::info!("[{label}] finished after {:?}", started.elapsed());
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("fast fetch (120 ms): nothing should mount");
    run_fetch("fast", Duration::from_millis(120));

    log::info!("slow fetch (3 s): spinner near 0.5 s, banner near 2 s");
    run_fetch("slow", Duration::from_secs(3));

    Ok(())
}
