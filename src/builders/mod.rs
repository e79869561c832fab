//! Builders to install auto-scroll wiring from configuration.

pub mod autoscroll_builder;

pub use autoscroll_builder::{build_autoscroll, build_autoscroll_from_env};
