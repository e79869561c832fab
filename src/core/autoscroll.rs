//! Scroll-to-bottom wiring.
//!
//! Three triggers keep the page pinned to its bottom:
//!
//! 1. page load, followed by one direct scroll after a short settle delay,
//! 2. window resize,
//! 3. size changes of the watched container element.
//!
//! Triggers 2 and 3 go through one shared [`Debouncer`], so a burst of resize
//! notifications produces a single scroll per quiet period.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::debounce::Debouncer;
use super::host::{scroll_to_bottom, PageEvents, PageHost, ScrollBehavior};
use super::timer::TimerFacility;

/// Default debounce wait for resize-driven scrolls.
pub const DEFAULT_DEBOUNCE_WAIT: Duration = Duration::from_millis(200);
/// Default delay between the load event and the first scroll.
pub const DEFAULT_POST_LOAD_DELAY: Duration = Duration::from_millis(150);
/// Default selector of the watched container.
pub const DEFAULT_CONTAINER_SELECTOR: &str = ".container";

/// Runtime values for the wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoScrollOptions {
    /// Quiet period of the shared debouncer.
    pub wait: Duration,
    /// Delay between load and the first scroll.
    pub post_load_delay: Duration,
    /// Selector of the element whose size changes are watched.
    pub container_selector: String,
    /// Scroll animation.
    pub behavior: ScrollBehavior,
}

impl Default for AutoScrollOptions {
    fn default() -> Self {
        Self {
            wait: DEFAULT_DEBOUNCE_WAIT,
            post_load_delay: DEFAULT_POST_LOAD_DELAY,
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Outcome of attaching the size-change observer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObserverStatus {
    /// The page has not loaded yet.
    Pending,
    /// The container is being watched.
    Attached,
    /// No element matched the container selector.
    ElementMissing,
    /// The host could not provide a size-change observer.
    Failed(String),
}

/// Installed auto-scroll wiring for one page.
pub struct AutoScroll<H, T>
where
    T: TimerFacility,
{
    host: Arc<H>,
    debouncer: Debouncer<(), T>,
    /// Armed post-load scroll, cleared when it fires.
    post_load: Arc<Mutex<Option<T::Handle>>>,
    timer: T,
    observer: Arc<Mutex<ObserverStatus>>,
    options: AutoScrollOptions,
}

impl<H, T> AutoScroll<H, T>
where
    H: PageHost,
    T: TimerFacility + Clone,
{
    /// Register the load trigger on `host`. The resize and size-change
    /// triggers are attached once the page has loaded.
    pub fn install(host: Arc<H>, timer: T, options: AutoScrollOptions) -> Self {
        let behavior = options.behavior;
        let scroll_host: Weak<H> = Arc::downgrade(&host);
        let debouncer = Debouncer::new(
            move |()| {
                if let Some(host) = scroll_host.upgrade() {
                    scroll_to_bottom(&*host, behavior);
                }
            },
            options.wait,
            timer.clone(),
        );
        let observer = Arc::new(Mutex::new(ObserverStatus::Pending));
        let post_load: Arc<Mutex<Option<T::Handle>>> = Arc::new(Mutex::new(None));

        let load_timer = timer.clone();
        let load_post_load = Arc::clone(&post_load);
        let load_host = Arc::downgrade(&host);
        let load_debouncer = debouncer.clone();
        let load_observer = Arc::clone(&observer);
        let selector = options.container_selector.clone();
        let post_load_delay = options.post_load_delay;
        host.on_load(Box::new(move || {
            let Some(host) = load_host.upgrade() else {
                return;
            };
            tracing::debug!("page loaded");

            let first_scroll = Arc::downgrade(&host);
            let fired = Arc::clone(&load_post_load);
            // Held across `schedule` so the callback clears the stored handle
            // even when it fires before the handle is stored.
            let mut armed = load_post_load.lock();
            *armed = Some(load_timer.schedule(
                post_load_delay,
                Box::new(move || {
                    fired.lock().take();
                    if let Some(host) = first_scroll.upgrade() {
                        scroll_to_bottom(&*host, behavior);
                    }
                }),
            ));
            drop(armed);

            *load_observer.lock() = attach_observer(&*host, &selector, &load_debouncer);

            let resize = load_debouncer.clone();
            host.on_window_resize(Arc::new(move || resize.invoke(())));
        }));

        Self {
            host,
            debouncer,
            post_load,
            timer,
            observer,
            options,
        }
    }
}

impl<H, T> AutoScroll<H, T>
where
    T: TimerFacility,
{
    /// Current state of the size-change observer.
    pub fn observer_status(&self) -> ObserverStatus {
        self.observer.lock().clone()
    }

    /// Shared debouncer behind the resize triggers.
    pub fn debouncer(&self) -> &Debouncer<(), T> {
        &self.debouncer
    }

    /// Options the wiring was installed with.
    pub fn options(&self) -> &AutoScrollOptions {
        &self.options
    }

    /// Page the wiring is attached to.
    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    /// Drop the post-load scroll if it has not fired yet, and any pending
    /// debounced scroll. Returns whether either was pending.
    pub fn stop(&self) -> bool {
        let post_load = self.post_load.lock().take();
        let post_load_pending = post_load.is_some();
        if let Some(handle) = post_load {
            self.timer.cancel(handle);
            tracing::debug!("cancelled post-load scroll");
        }
        let debounced_pending = self.debouncer.cancel();
        post_load_pending || debounced_pending
    }
}

/// Watch the container, if there is one. Failure is logged and reported,
/// never propagated.
fn attach_observer<E, T>(host: &E, selector: &str, debouncer: &Debouncer<(), T>) -> ObserverStatus
where
    E: PageEvents + ?Sized,
    T: TimerFacility,
{
    let Some(element) = host.query_selector(selector) else {
        tracing::warn!(selector, "container element not found; size-change observer not attached");
        return ObserverStatus::ElementMissing;
    };

    let on_change = debouncer.clone();
    let callback = Arc::new(move || {
        tracing::debug!("container size change detected");
        on_change.invoke(());
    });
    match host.observe_resize(&element, callback) {
        Ok(()) => {
            tracing::info!(selector, "size-change observer watching container");
            ObserverStatus::Attached
        }
        Err(e) => {
            tracing::error!(selector, error = %e, "size-change observer unsupported or failed");
            ObserverStatus::Failed(e.to_string())
        }
    }
}
