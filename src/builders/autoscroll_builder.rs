//! Builders to install auto-scroll wiring from configuration.

use std::sync::Arc;

use crate::config::AutoScrollConfig;
use crate::core::{AutoScroll, AutoScrollError, PageHost, TimerFacility};

/// Validate `cfg` and install the wiring on `host`.
pub fn build_autoscroll<H, T>(
    cfg: &AutoScrollConfig,
    host: Arc<H>,
    timer: T,
) -> Result<AutoScroll<H, T>, AutoScrollError>
where
    H: PageHost,
    T: TimerFacility + Clone,
{
    cfg.validate().map_err(AutoScrollError::Config)?;

    let options = cfg.to_options();
    tracing::debug!(
        wait_ms = cfg.debounce_wait_ms,
        post_load_delay_ms = cfg.post_load_delay_ms,
        selector = %options.container_selector,
        "installing auto-scroll"
    );
    Ok(AutoScroll::install(host, timer, options))
}

/// Install the wiring with configuration read from the environment.
pub fn build_autoscroll_from_env<H, T>(host: Arc<H>, timer: T) -> Result<AutoScroll<H, T>, AutoScrollError>
where
    H: PageHost,
    T: TimerFacility + Clone,
{
    let cfg = AutoScrollConfig::from_env().map_err(AutoScrollError::Config)?;
    build_autoscroll(&cfg, host, timer)
}
