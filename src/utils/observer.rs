//! Owned wrapper around a browser `IntersectionObserver`.
//!
//! The observer is disconnected when the wrapper is dropped, so holding a
//! [`RevealObserver`] is the same as holding a live subscription.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::reveal::{ROOT_MARGIN, THRESHOLD};

/// Attribute carrying a card's zero-based position.
const POSITION_ATTR: &str = "data-position";

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Intersection observer that reports card positions entering the viewport.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl RevealObserver {
    /// Create an observer using the configured margin and threshold.
    ///
    /// `on_enter` receives the position of each card that starts
    /// intersecting and returns whether that card should be unobserved.
    pub fn new(mut on_enter: impl FnMut(usize) -> bool + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(position) = target
                        .get_attribute(POSITION_ATTR)
                        .and_then(|p| p.parse::<usize>().ok())
                    else {
                        continue;
                    };
                    if on_enter(position) {
                        observer.unobserve(&target);
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(ROOT_MARGIN);
        options.set_threshold(&THRESHOLD.into());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => Some(Self {
                observer,
                _callback: callback,
            }),
            Err(e) => {
                log::error!("IntersectionObserver unavailable: {:?}", e);
                None
            }
        }
    }

    /// Start watching an element tagged with [`POSITION_ATTR`].
    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const SETTLE_MS: u32 = 300;

    fn tagged_element(position: usize) -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let el: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        el.set_attribute(POSITION_ATTR, &position.to_string())
            .unwrap();
        el.style().set_property("height", "40px").unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    fn recording_observer() -> (RevealObserver, Rc<RefCell<Vec<usize>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let observer = RevealObserver::new({
            let seen = Rc::clone(&seen);
            move |position| {
                seen.borrow_mut().push(position);
                true
            }
        })
        .unwrap();
        (observer, seen)
    }

    #[wasm_bindgen_test]
    async fn test_reports_position_of_visible_element() {
        let (observer, seen) = recording_observer();
        let el = tagged_element(3);
        observer.observe(&el);

        TimeoutFuture::new(SETTLE_MS).await;
        assert_eq!(*seen.borrow(), vec![3]);

        drop(observer);
        el.remove();
    }

    #[wasm_bindgen_test]
    async fn test_dropped_observer_stops_reporting() {
        let (observer, seen) = recording_observer();
        let el = tagged_element(5);
        observer.observe(&el);
        drop(observer);

        TimeoutFuture::new(SETTLE_MS).await;
        assert!(seen.borrow().is_empty());
        el.remove();
    }
}
