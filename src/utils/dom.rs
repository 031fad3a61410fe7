//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Element, HtmlElement, Storage, Window};

use crate::core::Span;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get the `<html>` element.
pub fn document_element() -> Option<HtmlElement> {
    use wasm_bindgen::JsCast;

    window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Horizontal extent of an element's bounding box.
pub fn horizontal_span(element: &Element) -> Span {
    let rect = element.get_bounding_client_rect();
    Span {
        left: rect.left(),
        width: rect.width(),
    }
}

/// Current vertical scroll offset of the page.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Largest vertical scroll offset the page allows.
pub fn max_scroll_y() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let content = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| f64::from(e.scroll_height()))
        .unwrap_or(0.0);
    (content - viewport).max(0.0)
}

/// Jump the page to a vertical offset without native smoothing.
pub fn scroll_to_y(offset: f64) {
    if let Some(window) = window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(offset);
        options.set_behavior(web_sys::ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Set a CSS custom property on the `<html>` element.
pub fn set_root_property(name: &str, value: &str) {
    if let Some(root) = document_element() {
        let _ = root.style().set_property(name, value);
    }
}

/// Whether the user asked the OS to minimize motion.
pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .is_some_and(|m| m.matches())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_available() {
        let storage = local_storage().expect("localStorage in browser");
        storage.set_item("medialog-test", "1").unwrap();
        assert_eq!(storage.get_item("medialog-test").unwrap().as_deref(), Some("1"));
        storage.remove_item("medialog-test").unwrap();
    }

    #[wasm_bindgen_test]
    fn test_set_root_property() {
        set_root_property("--medialog-test", "4px");
        let root = document_element().unwrap();
        assert_eq!(
            root.style().get_property_value("--medialog-test").unwrap(),
            "4px"
        );
    }
}
