//! # Debounced Autoscroll
//!
//! Keeps a page scrolled to its bottom while its content grows.
//!
//! Three triggers request a scroll: the page load event, window resizes, and
//! size changes of a watched container element. Resize notifications arrive
//! in bursts, so they are routed through one shared [`Debouncer`]: a burst of
//! calls spaced closer than the wait collapses into a single scroll, fired
//! `wait` after the last call of the burst.
//!
//! ## Debouncer
//!
//! The debouncer is usable on its own with any [`TimerFacility`]:
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use debounced_autoscroll::core::Debouncer;
//! use debounced_autoscroll::runtime::TokioTimer;
//!
//! let timer = TokioTimer::current()?;
//! let save = Debouncer::new(|doc: String| persist(doc), Duration::from_millis(200), timer);
//!
//! save.invoke("draft 1".into());
//! save.invoke("draft 2".into()); // only this one is persisted
//! ```
//!
//! ## Page wiring
//!
//! A page is anything implementing [`ScrollSurface`] and [`PageEvents`].
//! [`InMemoryPage`] is a headless implementation for tests and demos:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use debounced_autoscroll::builders::build_autoscroll;
//! use debounced_autoscroll::config::AutoScrollConfig;
//! use debounced_autoscroll::infra::InMemoryPage;
//! use debounced_autoscroll::runtime::ManualTimer;
//!
//! let page = Arc::new(InMemoryPage::new(800.0).with_element(".container"));
//! let timer = ManualTimer::new();
//! let wiring = build_autoscroll(&AutoScrollConfig::default(), Arc::clone(&page), timer.clone())?;
//!
//! page.load();
//! timer.advance(std::time::Duration::from_millis(150)); // first scroll
//! ```
//!
//! For complete scenarios, see `tests/autoscroll_wiring_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Debounce scheduler, host capabilities, and the page wiring.
pub mod core;
/// Configuration models for the wiring.
pub mod config;
/// Builders to install the wiring from configuration.
pub mod builders;
/// Host page adapters.
pub mod infra;
/// Timer facilities (manual clock, tokio).
pub mod runtime;
/// Shared utilities.
pub mod util;

pub use crate::core::{
    AutoScroll, AutoScrollError, AutoScrollOptions, Debouncer, ObserverStatus, PageEvents, ScrollSurface,
    TimerFacility,
};
pub use crate::infra::InMemoryPage;
