//! Tests for builders

use std::sync::Arc;
use std::time::Duration;

use debounced_autoscroll::builders::{build_autoscroll, build_autoscroll_from_env};
use debounced_autoscroll::config::AutoScrollConfig;
use debounced_autoscroll::core::{AutoScrollError, ObserverStatus};
use debounced_autoscroll::infra::InMemoryPage;
use debounced_autoscroll::runtime::ManualTimer;

#[test]
fn test_build_autoscroll_from_default_config() {
    let page = Arc::new(InMemoryPage::new(640.0).with_element(".container"));
    let timer = ManualTimer::new();

    let wiring = build_autoscroll(&AutoScrollConfig::default(), Arc::clone(&page), timer).expect("valid config");
    assert_eq!(wiring.options().wait, Duration::from_millis(200));
    assert_eq!(wiring.observer_status(), ObserverStatus::Pending);
    assert!(Arc::ptr_eq(wiring.host(), &page));
}

#[test]
fn test_build_autoscroll_rejects_invalid_config() {
    let page = Arc::new(InMemoryPage::new(640.0));
    let cfg = AutoScrollConfig {
        container_selector: String::new(),
        ..AutoScrollConfig::default()
    };

    let result = build_autoscroll(&cfg, page, ManualTimer::new());
    assert!(matches!(result, Err(AutoScrollError::Config(_))));
}

#[test]
fn test_build_autoscroll_from_env_defaults() {
    let page = Arc::new(InMemoryPage::new(640.0));
    let timer = ManualTimer::new();

    // Only reads AUTOSCROLL_* variables, which the test environment leaves unset.
    let wiring = build_autoscroll_from_env(Arc::clone(&page), timer.clone()).expect("defaults are valid");
    page.load();
    timer.advance(wiring.options().post_load_delay);

    assert_eq!(wiring.observer_status(), ObserverStatus::ElementMissing);
    assert_eq!(page.scroll_count(), 1);
}
