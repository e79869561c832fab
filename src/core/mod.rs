//! Debounce scheduling and the auto-scroll wiring built on it.

pub mod autoscroll;
pub mod debounce;
pub mod error;
pub mod host;
pub mod timer;

pub use autoscroll::{
    AutoScroll, AutoScrollOptions, ObserverStatus, DEFAULT_CONTAINER_SELECTOR, DEFAULT_DEBOUNCE_WAIT,
    DEFAULT_POST_LOAD_DELAY,
};
pub use debounce::{DebounceStats, Debouncer};
pub use error::AutoScrollError;
pub use host::{
    scroll_to_bottom, ElementRef, EventCallback, LoadCallback, PageEvents, PageHost, ScrollBehavior,
    ScrollSurface, ScrollToOptions,
};
pub use timer::{TimerCallback, TimerFacility};
