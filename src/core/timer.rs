//! Timer facility consumed by the debounce scheduler.

use std::time::Duration;

/// Deferred work handed to a timer.
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Schedule-after-delay / cancel capability provided by the host runtime.
///
/// Implementations only promise best-effort cancellation: a callback that is
/// already running when `cancel` is called may still complete. Callers that
/// need a hard "never runs" guarantee, such as [`Debouncer`](super::Debouncer),
/// tag each callback and ignore stale ones.
pub trait TimerFacility: Send + Sync + 'static {
    /// Handle identifying one scheduled callback.
    type Handle: Send + 'static;

    /// Run `callback` once after `delay` has elapsed.
    ///
    /// `callback` must never run before `schedule` returns, even for a zero
    /// `delay`. Callers may hold locks across this call that the callback
    /// takes again.
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Self::Handle;

    /// Cancel a scheduled callback. Cancelling a fired handle is a no-op.
    fn cancel(&self, handle: Self::Handle);
}
