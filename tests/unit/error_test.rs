//! Tests for error types

use debounced_autoscroll::core::AutoScrollError;

#[test]
fn test_observer_unavailable_error() {
    let err = AutoScrollError::ObserverUnavailable("no ResizeObserver".to_string());
    assert_eq!(format!("{}", err), "size-change observer unavailable: no ResizeObserver");
}

#[test]
fn test_element_missing_error() {
    let err = AutoScrollError::ElementMissing(".container".to_string());
    assert_eq!(format!("{}", err), "element not found: .container");
}

#[test]
fn test_config_error() {
    let err = AutoScrollError::Config("container_selector must not be empty".to_string());
    assert_eq!(format!("{}", err), "invalid configuration: container_selector must not be empty");
}

#[test]
fn test_timer_error() {
    let err = AutoScrollError::Timer("no reactor running".to_string());
    assert_eq!(format!("{}", err), "timer error: no reactor running");
}
