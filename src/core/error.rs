//! Error types for auto-scroll setup.

use thiserror::Error;

/// Errors produced while wiring the auto-scroll triggers.
///
/// Only setup can fail. Scheduling and firing a debounced scroll never
/// return an error.
#[derive(Debug, Error)]
pub enum AutoScrollError {
    /// The host has no working size-change observation facility.
    #[error("size-change observer unavailable: {0}")]
    ObserverUnavailable(String),
    /// No element matches the selector.
    #[error("element not found: {0}")]
    ElementMissing(String),
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// No timer runtime is reachable from the calling context.
    #[error("timer error: {0}")]
    Timer(String),
}
