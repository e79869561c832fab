//! Tokio runtime timer implementation.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::core::{AutoScrollError, TimerCallback, TimerFacility};

/// Timer that runs each callback on a tokio task after `tokio::time::sleep`.
///
/// Cancellation aborts the task. A callback already past its sleep may still
/// run; the debouncer discards such stale firings itself.
#[derive(Clone)]
pub struct TokioTimer {
    handle: Arc<tokio::runtime::Handle>,
}

impl TokioTimer {
    /// Create a timer bound to a tokio runtime handle.
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }

    /// Bind to the runtime of the calling context.
    pub fn current() -> Result<Self, AutoScrollError> {
        tokio::runtime::Handle::try_current()
            .map(Self::new)
            .map_err(|e| AutoScrollError::Timer(e.to_string()))
    }
}

impl TimerFacility for TokioTimer {
    type Handle = JoinHandle<()>;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Self::Handle {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        })
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.abort();
    }
}
