use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use web_time::{Duration, Instant};

use crate::clock;

new_key_type! {
    pub struct TimerKey;
}

struct Entry {
    deadline: Instant,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    run: Box<dyn FnOnce()>,
}

struct Arena {
    entries: SlotMap<TimerKey, Entry>,
    next_seq: u64,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            entries: SlotMap::with_key(),
            next_seq: 0,
        }
    }
}

thread_local! {
    static ARENA: RefCell<Arena> = RefCell::new(Arena::default());
}

/// Handle to one scheduled wait. Dropping it cancels the wait, so whoever
/// holds the handle owns the outcome: replace it to supersede, drop it to
/// abandon.
pub struct TimerHandle {
    key: TimerKey,
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle {
    /// Cancel the wait. Idempotent, and effective even if the wait was
    /// already collected as due in the current [`tick`]: the flag is checked
    /// again right before the callback would run.
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        ARENA.with(|a| {
            a.borrow_mut().entries.remove(self.key);
        });
    }

    /// True while the wait is scheduled and neither fired nor cancelled.
    pub fn is_pending(&self) -> bool {
        !self.cancelled.get() && ARENA.with(|a| a.borrow().entries.contains_key(self.key))
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Schedule `f` to run once `after` has elapsed on the installed clock.
/// A zero `after` still waits for the next [`tick`]; nothing runs inline.
pub fn schedule(after: Duration, f: impl FnOnce() + 'static) -> TimerHandle {
    let cancelled = Rc::new(Cell::new(false));
    let deadline = clock::now() + after;
    let key = ARENA.with(|a| {
        let mut a = a.borrow_mut();
        let seq = a.next_seq;
        a.next_seq += 1;
        a.entries.insert(Entry {
            deadline,
            seq,
            cancelled: cancelled.clone(),
            run: Box::new(f),
        })
    });
    TimerHandle { key, cancelled }
}

/// Run every wait whose deadline has passed, in scheduling order, and return
/// how many ran.
///
/// Callbacks run after the arena borrow is released, so they may schedule
/// and cancel freely. A wait cancelled by an earlier callback in the same
/// tick is skipped.
pub fn tick() -> usize {
    let now = clock::now();
    let mut due: SmallVec<[Entry; 4]> = SmallVec::new();
    ARENA.with(|a| {
        let mut a = a.borrow_mut();
        let keys: SmallVec<[TimerKey; 4]> = a
            .entries
            .iter()
            .filter(|(_, e)| e.deadline <= now)
            .map(|(k, _)| k)
            .collect();
        for k in keys {
            if let Some(e) = a.entries.remove(k) {
                due.push(e);
            }
        }
    });
    due.sort_by_key(|e| (e.deadline, e.seq));
    let mut fired = 0;
    for e in due {
        if e.cancelled.get() {
            continue;
        }
        (e.run)();
        fired += 1;
    }
    fired
}

/// Earliest pending deadline. Hosts sleep until this between ticks instead
/// of polling.
pub fn next_deadline() -> Option<Instant> {
    ARENA.with(|a| a.borrow().entries.values().map(|e| e.deadline).min())
}

/// Number of scheduled, not-yet-fired waits on this thread.
pub fn pending_count() -> usize {
    ARENA.with(|a| a.borrow().entries.len())
}
