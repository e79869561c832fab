//! Deterministic timer driven by a virtual clock.
//!
//! Nothing fires until the owner calls [`ManualTimer::advance`] or
//! [`ManualTimer::advance_to`]. Callbacks run in deadline order, FIFO among
//! equal deadlines, with [`ManualTimer::now`] reporting the deadline being
//! fired. This makes millisecond-exact timing assertions possible.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::core::{TimerCallback, TimerFacility};

/// Handle for a callback scheduled on a [`ManualTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManualTimerHandle {
    deadline: Duration,
    seq: u64,
}

impl ManualTimerHandle {
    /// Virtual time at which the callback is due.
    pub const fn deadline(&self) -> Duration {
        self.deadline
    }
}

struct Wheel {
    now: Duration,
    next_seq: u64,
    entries: BTreeMap<(Duration, u64), TimerCallback>,
}

/// Virtual-clock timer facility.
#[derive(Clone)]
pub struct ManualTimer {
    wheel: Arc<Mutex<Wheel>>,
}

impl Default for ManualTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualTimer {
    /// Create a timer whose clock starts at zero.
    pub fn new() -> Self {
        Self {
            wheel: Arc::new(Mutex::new(Wheel {
                now: Duration::ZERO,
                next_seq: 0,
                entries: BTreeMap::new(),
            })),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.wheel.lock().now
    }

    /// Number of callbacks scheduled and not yet fired or cancelled.
    pub fn scheduled(&self) -> usize {
        self.wheel.lock().entries.len()
    }

    /// Move the clock forward by `by`, firing everything that falls due.
    /// Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now().saturating_add(by);
        self.advance_to(target)
    }

    /// Move the clock to `target`, firing everything due at or before it.
    ///
    /// Callbacks scheduled by a firing callback are honoured in the same pass
    /// when their deadline is not after `target`. A target in the past leaves
    /// the clock where it is.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;
        loop {
            let callback = {
                let mut wheel = self.wheel.lock();
                let due = wheel
                    .entries
                    .first_key_value()
                    .is_some_and(|(&(deadline, _), _)| deadline <= target);
                if !due {
                    if target > wheel.now {
                        wheel.now = target;
                    }
                    break;
                }
                let Some(((deadline, _), callback)) = wheel.entries.pop_first() else {
                    break;
                };
                if deadline > wheel.now {
                    wheel.now = deadline;
                }
                callback
            };
            // Lock released: the callback may schedule or cancel timers.
            callback();
            fired += 1;
        }
        fired
    }
}

impl TimerFacility for ManualTimer {
    type Handle = ManualTimerHandle;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Self::Handle {
        let mut wheel = self.wheel.lock();
        // Far-future deadlines saturate instead of overflowing.
        let deadline = wheel.now.saturating_add(delay);
        let seq = wheel.next_seq;
        wheel.next_seq += 1;
        wheel.entries.insert((deadline, seq), callback);
        ManualTimerHandle { deadline, seq }
    }

    fn cancel(&self, handle: Self::Handle) {
        self.wheel.lock().entries.remove(&(handle.deadline, handle.seq));
    }
}
