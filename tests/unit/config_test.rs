//! Tests for configuration validation

use std::collections::HashMap;
use std::time::Duration;

use debounced_autoscroll::config::{AutoScrollConfig, MAX_DELAY_MS};
use debounced_autoscroll::core::ScrollBehavior;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_default_config_matches_reference_values() {
    let cfg = AutoScrollConfig::default();
    assert_eq!(cfg.debounce_wait_ms, 200);
    assert_eq!(cfg.post_load_delay_ms, 150);
    assert_eq!(cfg.container_selector, ".container");
    assert_eq!(cfg.behavior, ScrollBehavior::Smooth);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_zero_wait_is_valid() {
    let cfg = AutoScrollConfig {
        debounce_wait_ms: 0,
        post_load_delay_ms: 0,
        ..AutoScrollConfig::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_invalid_wait() {
    let cfg = AutoScrollConfig {
        debounce_wait_ms: MAX_DELAY_MS + 1,
        ..AutoScrollConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_invalid_post_load_delay() {
    let cfg = AutoScrollConfig {
        post_load_delay_ms: MAX_DELAY_MS + 1,
        ..AutoScrollConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_empty_selector() {
    let cfg = AutoScrollConfig {
        container_selector: "   ".to_string(),
        ..AutoScrollConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r##"{
        "debounce_wait_ms": 300,
        "container_selector": "#chat",
        "behavior": "instant"
    }"##;

    let cfg = AutoScrollConfig::from_json_str(json).expect("valid config");
    assert_eq!(cfg.debounce_wait_ms, 300);
    assert_eq!(cfg.post_load_delay_ms, 150);
    assert_eq!(cfg.container_selector, "#chat");
    assert_eq!(cfg.behavior, ScrollBehavior::Instant);
}

#[test]
fn test_config_from_json_rejects_garbage() {
    assert!(AutoScrollConfig::from_json_str("{ not json").is_err());
    assert!(AutoScrollConfig::from_json_str(r#"{"container_selector": ""}"#).is_err());
}

#[test]
fn test_config_from_lookup() {
    let cfg = AutoScrollConfig::from_lookup(lookup(&[
        ("AUTOSCROLL_DEBOUNCE_WAIT_MS", "50"),
        ("AUTOSCROLL_POST_LOAD_DELAY_MS", " 10 "),
        ("AUTOSCROLL_CONTAINER_SELECTOR", ".log"),
        ("AUTOSCROLL_BEHAVIOR", "auto"),
    ]))
    .expect("valid env");

    assert_eq!(cfg.debounce_wait_ms, 50);
    assert_eq!(cfg.post_load_delay_ms, 10);
    assert_eq!(cfg.container_selector, ".log");
    assert_eq!(cfg.behavior, ScrollBehavior::Auto);
}

#[test]
fn test_config_from_lookup_defaults_when_unset() {
    let cfg = AutoScrollConfig::from_lookup(lookup(&[])).expect("defaults are valid");
    assert_eq!(cfg, AutoScrollConfig::default());
}

#[test]
fn test_config_from_lookup_bad_values() {
    assert!(AutoScrollConfig::from_lookup(lookup(&[("AUTOSCROLL_DEBOUNCE_WAIT_MS", "soon")])).is_err());
    assert!(AutoScrollConfig::from_lookup(lookup(&[("AUTOSCROLL_BEHAVIOR", "wobbly")])).is_err());
}

#[test]
fn test_config_to_options() {
    let cfg = AutoScrollConfig {
        container_selector: " .container ".to_string(),
        ..AutoScrollConfig::default()
    };
    let options = cfg.to_options();
    assert_eq!(options.wait, Duration::from_millis(200));
    assert_eq!(options.post_load_delay, Duration::from_millis(150));
    assert_eq!(options.container_selector, ".container");
}
