//! Debounce scheduler.
//!
//! A [`Debouncer`] wraps an action so that a burst of `invoke` calls spaced
//! closer than `wait` collapses into a single execution, `wait` after the last
//! call, using the arguments of that last call.
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use debounced_autoscroll::core::Debouncer;
//! use debounced_autoscroll::runtime::ManualTimer;
//!
//! let timer = ManualTimer::new();
//! let debouncer = Debouncer::new(|n: u32| println!("fired with {n}"), Duration::from_millis(200), timer.clone());
//!
//! debouncer.invoke(1);
//! debouncer.invoke(2); // supersedes 1
//! timer.advance(Duration::from_millis(200)); // prints "fired with 2"
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;

use super::timer::TimerFacility;

/// Counters describing what a debouncer has done so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct DebounceStats {
    /// Calls to `invoke`.
    pub invocations: u64,
    /// Pending invocations replaced by a newer call.
    pub superseded: u64,
    /// Times the wrapped action ran.
    pub fired: u64,
    /// Pending invocations dropped through `cancel`.
    pub cancelled: u64,
}

/// The armed-but-not-fired timer together with the captured arguments.
struct PendingInvocation<A, H> {
    generation: u64,
    handle: H,
    args: A,
}

struct SlotState<A, H> {
    /// Bumped every time a timer is armed. A firing callback whose generation
    /// no longer matches the pending one is stale.
    generation: u64,
    pending: Option<PendingInvocation<A, H>>,
}

struct Shared<A, T: TimerFacility> {
    action: Box<dyn Fn(A) + Send + Sync>,
    wait: Duration,
    timer: T,
    slot: Mutex<SlotState<A, T::Handle>>,
    invocations: AtomicU64,
    superseded: AtomicU64,
    fired: AtomicU64,
    cancelled: AtomicU64,
}

impl<A, T> Shared<A, T>
where
    A: Send + 'static,
    T: TimerFacility,
{
    fn fire(&self, generation: u64) {
        let args = {
            let mut slot = self.slot.lock();
            match slot.pending.take() {
                Some(pending) if pending.generation == generation => pending.args,
                other => {
                    slot.pending = other;
                    tracing::trace!(generation, "ignoring stale debounce timer");
                    return;
                }
            }
        };

        self.fired.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(generation, "debounce timer fired");
        (self.action)(args);
    }
}

impl<A, T: TimerFacility> Drop for Shared<A, T> {
    fn drop(&mut self) {
        if let Some(pending) = self.slot.get_mut().pending.take() {
            self.timer.cancel(pending.handle);
        }
    }
}

/// Collapses bursts of calls into one deferred call of the wrapped action.
///
/// Cloning is cheap; clones share one pending slot, so several event sources
/// can feed the same debouncer. When the last clone is dropped any pending
/// invocation is cancelled.
pub struct Debouncer<A, T: TimerFacility> {
    shared: Arc<Shared<A, T>>,
}

impl<A, T: TimerFacility> Clone for Debouncer<A, T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A, T: TimerFacility> fmt::Debug for Debouncer<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("wait", &self.shared.wait)
            .field("pending", &self.shared.slot.lock().pending.is_some())
            .finish_non_exhaustive()
    }
}

impl<A, T> Debouncer<A, T>
where
    A: Send + 'static,
    T: TimerFacility,
{
    /// Wrap `action` so that it runs `wait` after the last of a burst of calls.
    pub fn new<F>(action: F, wait: Duration, timer: T) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                action: Box::new(action),
                wait,
                timer,
                slot: Mutex::new(SlotState {
                    generation: 0,
                    pending: None,
                }),
                invocations: AtomicU64::new(0),
                superseded: AtomicU64::new(0),
                fired: AtomicU64::new(0),
                cancelled: AtomicU64::new(0),
            }),
        }
    }

    /// Request a call of the action with `args`.
    ///
    /// Any outstanding timer is cancelled before the new one is armed, and
    /// both happen under the slot lock, so a superseded timer can never
    /// deliver its arguments.
    pub fn invoke(&self, args: A) {
        self.shared.invocations.fetch_add(1, Ordering::Relaxed);

        let mut slot = self.shared.slot.lock();
        if let Some(previous) = slot.pending.take() {
            self.shared.timer.cancel(previous.handle);
            self.shared.superseded.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(generation = previous.generation, "superseded pending invocation");
        }

        slot.generation += 1;
        let generation = slot.generation;
        let weak: Weak<Shared<A, T>> = Arc::downgrade(&self.shared);
        let handle = self.shared.timer.schedule(
            self.shared.wait,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.fire(generation);
                }
            }),
        );
        slot.pending = Some(PendingInvocation {
            generation,
            handle,
            args,
        });
    }

    /// Drop the pending invocation, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let pending = self.shared.slot.lock().pending.take();
        match pending {
            Some(pending) => {
                self.shared.timer.cancel(pending.handle);
                self.shared.cancelled.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(generation = pending.generation, "cancelled pending invocation");
                true
            }
            None => false,
        }
    }

    /// Whether a timer is currently armed.
    pub fn is_pending(&self) -> bool {
        self.shared.slot.lock().pending.is_some()
    }

    /// Configured quiet period.
    pub fn wait(&self) -> Duration {
        self.shared.wait
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> DebounceStats {
        DebounceStats {
            invocations: self.shared.invocations.load(Ordering::Relaxed),
            superseded: self.shared.superseded.load(Ordering::Relaxed),
            fired: self.shared.fired.load(Ordering::Relaxed),
            cancelled: self.shared.cancelled.load(Ordering::Relaxed),
        }
    }
}
