//! Host page capabilities the auto-scroll wiring consumes.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::AutoScrollError;

/// Callback for a repeating page event.
pub type EventCallback = Arc<dyn Fn() + Send + Sync + 'static>;

/// Callback for the one-shot load event.
pub type LoadCallback = Box<dyn FnOnce() + Send + 'static>;

/// How the viewport moves to its new position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    /// Animated scroll.
    #[default]
    Smooth,
    /// Jump straight to the target.
    Instant,
    /// Let the host decide.
    Auto,
}

impl FromStr for ScrollBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smooth" => Ok(Self::Smooth),
            "instant" => Ok(Self::Instant),
            "auto" => Ok(Self::Auto),
            other => Err(format!("unknown scroll behavior `{other}`")),
        }
    }
}

/// Arguments of a scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollToOptions {
    /// Target vertical offset in CSS pixels.
    pub top: f64,
    /// Scroll animation.
    pub behavior: ScrollBehavior,
}

/// Opaque reference to an element found by selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementRef {
    selector: String,
}

impl ElementRef {
    /// Reference the element matched by `selector`.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    /// Selector the element was found with.
    pub fn selector(&self) -> &str {
        &self.selector
    }
}

/// Scrollable document.
pub trait ScrollSurface: Send + Sync + 'static {
    /// Full height of the document content.
    fn scroll_height(&self) -> f64;
    /// Move the viewport.
    fn scroll_to(&self, options: ScrollToOptions);
}

/// Event sources and element lookup of the page.
pub trait PageEvents: Send + Sync + 'static {
    /// Run `callback` once the page has finished loading.
    fn on_load(&self, callback: LoadCallback);
    /// Run `callback` on every window resize.
    fn on_window_resize(&self, callback: EventCallback);
    /// Find the first element matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<ElementRef>;
    /// Run `callback` whenever `element` changes size.
    ///
    /// Fails when the host has no size-change observation facility or it
    /// cannot be initialised.
    fn observe_resize(&self, element: &ElementRef, callback: EventCallback) -> Result<(), AutoScrollError>;
}

/// A page that can both be scrolled and observed.
pub trait PageHost: ScrollSurface + PageEvents {}

impl<T> PageHost for T where T: ScrollSurface + PageEvents {}

/// Scroll `surface` to the bottom of its content.
pub fn scroll_to_bottom<S>(surface: &S, behavior: ScrollBehavior)
where
    S: ScrollSurface + ?Sized,
{
    let top = surface.scroll_height();
    tracing::debug!(top, ?behavior, "scrolling to bottom");
    surface.scroll_to(ScrollToOptions { top, behavior });
}
