//! Auto-scroll configuration structures.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{
    AutoScrollOptions, ScrollBehavior, DEFAULT_CONTAINER_SELECTOR, DEFAULT_DEBOUNCE_WAIT,
    DEFAULT_POST_LOAD_DELAY,
};

/// Upper bound for either delay. Anything longer stops feeling like a scroll
/// reaction.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Environment variable prefix read by [`AutoScrollConfig::from_env`].
pub const ENV_PREFIX: &str = "AUTOSCROLL_";

/// Auto-scroll configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScrollConfig {
    /// Quiet period of the resize debouncer in milliseconds.
    pub debounce_wait_ms: u64,
    /// Delay between the load event and the first scroll in milliseconds.
    pub post_load_delay_ms: u64,
    /// Selector of the element whose size changes are watched.
    pub container_selector: String,
    /// Scroll animation.
    pub behavior: ScrollBehavior,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            debounce_wait_ms: millis(DEFAULT_DEBOUNCE_WAIT),
            post_load_delay_ms: millis(DEFAULT_POST_LOAD_DELAY),
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            behavior: ScrollBehavior::Smooth,
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl AutoScrollConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.debounce_wait_ms > MAX_DELAY_MS {
            return Err(format!("debounce_wait_ms must be at most {MAX_DELAY_MS}"));
        }
        if self.post_load_delay_ms > MAX_DELAY_MS {
            return Err(format!("post_load_delay_ms must be at most {MAX_DELAY_MS}"));
        }
        if self.container_selector.trim().is_empty() {
            return Err("container_selector must not be empty".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate. Missing fields
    /// take their defaults.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read `AUTOSCROLL_*` variables from the process environment, after
    /// loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, String> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup. Unset
    /// variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));
        let mut cfg = Self::default();

        if let Some(raw) = var("DEBOUNCE_WAIT_MS") {
            cfg.debounce_wait_ms = parse_ms("DEBOUNCE_WAIT_MS", &raw)?;
        }
        if let Some(raw) = var("POST_LOAD_DELAY_MS") {
            cfg.post_load_delay_ms = parse_ms("POST_LOAD_DELAY_MS", &raw)?;
        }
        if let Some(raw) = var("CONTAINER_SELECTOR") {
            cfg.container_selector = raw;
        }
        if let Some(raw) = var("BEHAVIOR") {
            cfg.behavior = raw.parse()?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Convert to the runtime options used by the wiring.
    pub fn to_options(&self) -> AutoScrollOptions {
        AutoScrollOptions {
            wait: Duration::from_millis(self.debounce_wait_ms),
            post_load_delay: Duration::from_millis(self.post_load_delay_ms),
            container_selector: self.container_selector.trim().to_string(),
            behavior: self.behavior,
        }
    }
}

fn parse_ms(name: &str, raw: &str) -> Result<u64, String> {
    raw.trim()
        .parse()
        .map_err(|e| format!("{ENV_PREFIX}{name}: invalid milliseconds `{raw}`: {e}"))
}
