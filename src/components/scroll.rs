//! Smooth-scroll and cursor effects layer.
//!
//! Renders nothing. Once mounted it starts a per-frame loop that runs for
//! the lifetime of the page, independent of tab switches and fetches. The
//! loop applies [`SmoothScroll`] offsets and publishes visual state as CSS
//! custom properties on `<html>`:
//!
//! | Property | Meaning |
//! |----------|---------|
//! | `--scroll-skew` | velocity-driven card skew |
//! | `--spot-x`, `--spot-y` | cursor position for the spotlight |

use leptos::ev;
use leptos::prelude::*;
use leptos_use::{UseRafFnCallbackArgs, use_raf_fn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{AddEventListenerOptions, WheelEvent};

use crate::config::MS_PER_SECOND;
use crate::core::SmoothScroll;
use crate::core::scroll::{intercepts_wheel, wheel_delta_px};
use crate::utils::dom;
use crate::utils::format::{format_deg, format_px};

/// Intercept wheel input and feed it to the physics state.
///
/// Registered as non-passive so the native scroll can be cancelled. The
/// listener lives as long as the page.
fn install_wheel_listener(scroll: StoredValue<SmoothScroll>) {
    let Some(window) = dom::window() else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |event: WheelEvent| {
        if !intercepts_wheel(event.delta_y(), event.ctrl_key()) {
            return;
        }
        event.prevent_default();

        let page_height = dom::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let delta = wheel_delta_px(event.delta_y(), event.delta_mode(), page_height);
        let limit = dom::max_scroll_y();
        scroll.update_value(|s| s.wheel(delta, limit));
    }) as Box<dyn FnMut(WheelEvent)>);

    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    if window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        log::warn!("smooth scroll disabled: wheel listener rejected");
    }

    closure.forget();
}

/// One animation frame: advance the physics and publish the results.
fn frame(scroll: StoredValue<SmoothScroll>, last_skew: StoredValue<f64>, now_secs: f64) {
    let mut offset = None;
    scroll.update_value(|s| offset = s.step(now_secs));
    if let Some(y) = offset {
        dom::scroll_to_y(y);
    }

    let skew = scroll.with_value(|s| s.skew_deg());
    if skew != last_skew.get_value() {
        last_skew.set_value(skew);
        dom::set_root_property("--scroll-skew", &format_deg(skew));
    }
}

#[component]
pub fn ScrollLayer() -> impl IntoView {
    let scroll = StoredValue::new(SmoothScroll::new(dom::scroll_y()));
    let last_skew = StoredValue::new(0.0_f64);

    if dom::prefers_reduced_motion() {
        log::info!("reduced motion requested: keeping native scrolling");
    } else {
        install_wheel_listener(scroll);
    }

    // Keyboard, scrollbar and touch scrolling stay native
    let _ = window_event_listener(ev::scroll, move |_| {
        scroll.update_value(|s| s.sync(dom::scroll_y()));
    });

    let _ = window_event_listener(ev::mousemove, move |event| {
        dom::set_root_property("--spot-x", &format_px(f64::from(event.client_x())));
        dom::set_root_property("--spot-y", &format_px(f64::from(event.client_y())));
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        frame(scroll, last_skew, args.timestamp / MS_PER_SECOND);
    });
}
