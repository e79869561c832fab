//! Configuration models for the auto-scroll wiring.

pub mod scroll;

pub use scroll::{AutoScrollConfig, ENV_PREFIX, MAX_DELAY_MS};
