//! Timer facilities the debouncer can run on.

pub mod manual_timer;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_timer;

pub use manual_timer::{ManualTimer, ManualTimerHandle};
#[cfg(feature = "tokio-runtime")]
pub use tokio_timer::TokioTimer;
