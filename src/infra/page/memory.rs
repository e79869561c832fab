//! Headless in-memory page.
//!
//! Stands in for a browser document in tests and demos: it keeps the
//! registered event callbacks, a set of known elements, and a log of every
//! scroll request. Drivers fire events explicitly with [`InMemoryPage::load`],
//! [`InMemoryPage::resize_window`] and [`InMemoryPage::resize_element`].

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use crate::core::{
    AutoScrollError, ElementRef, EventCallback, LoadCallback, PageEvents, ScrollSurface,
    ScrollToOptions,
};

struct PageState {
    scroll_height: f64,
    scroll_top: f64,
    scrolls: Vec<ScrollToOptions>,
    loaded: bool,
    load_callbacks: Vec<LoadCallback>,
    resize_callbacks: Vec<EventCallback>,
    elements: HashSet<String>,
    observers: HashMap<String, Vec<EventCallback>>,
    observer_support: bool,
}

/// In-memory page implementing [`ScrollSurface`] and [`PageEvents`].
pub struct InMemoryPage {
    state: Mutex<PageState>,
}

impl Default for InMemoryPage {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl InMemoryPage {
    /// Create an empty page with the given content height.
    pub fn new(scroll_height: f64) -> Self {
        Self {
            state: Mutex::new(PageState {
                scroll_height,
                scroll_top: 0.0,
                scrolls: Vec::new(),
                loaded: false,
                load_callbacks: Vec::new(),
                resize_callbacks: Vec::new(),
                elements: HashSet::new(),
                observers: HashMap::new(),
                observer_support: true,
            }),
        }
    }

    /// Add an element addressable by `selector`.
    #[must_use]
    pub fn with_element(self, selector: impl Into<String>) -> Self {
        self.state.lock().elements.insert(selector.into());
        self
    }

    /// Make the size-change observer facility unavailable.
    #[must_use]
    pub fn without_resize_observer(self) -> Self {
        self.state.lock().observer_support = false;
        self
    }

    /// Change the content height, as if content was appended.
    pub fn set_scroll_height(&self, height: f64) {
        self.state.lock().scroll_height = height;
    }

    /// Fire the load event. Only the first call has an effect.
    pub fn load(&self) {
        let callbacks = {
            let mut state = self.state.lock();
            if state.loaded {
                return;
            }
            state.loaded = true;
            std::mem::take(&mut state.load_callbacks)
        };
        for callback in callbacks {
            callback();
        }
    }

    /// Fire a window resize. Returns the number of listeners notified.
    pub fn resize_window(&self) -> usize {
        let callbacks = self.state.lock().resize_callbacks.clone();
        for callback in &callbacks {
            callback();
        }
        callbacks.len()
    }

    /// Report a size change of the element matched by `selector`. Returns
    /// the number of observers notified.
    pub fn resize_element(&self, selector: &str) -> Result<usize, AutoScrollError> {
        let callbacks = {
            let state = self.state.lock();
            if !state.elements.contains(selector) {
                return Err(AutoScrollError::ElementMissing(selector.to_string()));
            }
            state.observers.get(selector).cloned().unwrap_or_default()
        };
        for callback in &callbacks {
            callback();
        }
        Ok(callbacks.len())
    }

    /// Every scroll request received so far.
    pub fn scrolls(&self) -> Vec<ScrollToOptions> {
        self.state.lock().scrolls.clone()
    }

    /// Number of scroll requests received so far.
    pub fn scroll_count(&self) -> usize {
        self.state.lock().scrolls.len()
    }

    /// Current viewport offset.
    pub fn scroll_top(&self) -> f64 {
        self.state.lock().scroll_top
    }

    /// Whether the load event has fired.
    pub fn is_loaded(&self) -> bool {
        self.state.lock().loaded
    }
}

impl ScrollSurface for InMemoryPage {
    fn scroll_height(&self) -> f64 {
        self.state.lock().scroll_height
    }

    fn scroll_to(&self, options: ScrollToOptions) {
        let mut state = self.state.lock();
        state.scroll_top = options.top.clamp(0.0, state.scroll_height.max(0.0));
        state.scrolls.push(options);
    }
}

impl PageEvents for InMemoryPage {
    fn on_load(&self, callback: LoadCallback) {
        // Like a browser, listeners added after load never fire.
        self.state.lock().load_callbacks.push(callback);
    }

    fn on_window_resize(&self, callback: EventCallback) {
        self.state.lock().resize_callbacks.push(callback);
    }

    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        self.state
            .lock()
            .elements
            .contains(selector)
            .then(|| ElementRef::new(selector))
    }

    fn observe_resize(&self, element: &ElementRef, callback: EventCallback) -> Result<(), AutoScrollError> {
        let mut state = self.state.lock();
        if !state.observer_support {
            return Err(AutoScrollError::ObserverUnavailable(
                "size-change observation is not supported by this page".into(),
            ));
        }
        if !state.elements.contains(element.selector()) {
            return Err(AutoScrollError::ElementMissing(element.selector().to_string()));
        }
        state
            .observers
            .entry(element.selector().to_string())
            .or_default()
            .push(callback);
        Ok(())
    }
}
