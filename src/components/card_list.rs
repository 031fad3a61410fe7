//! Card container: skeleton, cards, or failure message.
//!
//! Each time new cards are shown a [`RenderPass`] is created for them. The
//! pass owns the visibility observer; the previous pass is dropped (and its
//! observer disconnected) before the next one is built.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::Element;

use super::card::{Card, CardReveal, SkeletonCard};
use crate::app::AppContext;
use crate::config::render::SKELETON_CARDS;
use crate::config::transition::{FADE_IN_MS, FADE_OUT_MS};
use crate::core::{RevealTracker, build_cards};
use crate::models::{Card as CardModel, Content, ImagePriority, Phase};
use crate::utils::RevealObserver;
use crate::utils::format::format_ms;

stylance::import_crate_style!(css, "src/components/card_list.module.css");

// ============================================================================
// Render Pass
// ============================================================================

/// Lazy-reveal state for one set of rendered cards.
pub struct RenderPass {
    tracker: Rc<RefCell<RevealTracker>>,
    reveals: Vec<CardReveal>,
    observer: Option<RevealObserver>,
}

impl RenderPass {
    /// Create reveal signals for `cards` and arm a fresh observer.
    fn new(cards: &[CardModel]) -> Self {
        let reveals: Vec<CardReveal> = cards
            .iter()
            .map(|card| CardReveal::new(card.priority == ImagePriority::Eager))
            .collect();
        let tracker = Rc::new(RefCell::new(RevealTracker::new()));

        let observer = {
            let tracker = Rc::clone(&tracker);
            let reveals = reveals.clone();
            RevealObserver::new(move |position| {
                let action = tracker.borrow_mut().intersect(position);
                if let Some(reveal) = reveals.get(position) {
                    reveal.apply(action);
                }
                action.unobserve
            })
        };

        if observer.is_none() {
            // No observer support: show everything up front
            for reveal in &reveals {
                reveal.reveal_now();
            }
        }

        Self {
            tracker,
            reveals,
            observer,
        }
    }

    fn reveal(&self, position: usize) -> Option<CardReveal> {
        self.reveals.get(position).copied()
    }

    /// Watch a card element. Repeat calls for the same position are ignored.
    ///
    /// Returns whether the element was handed to the observer.
    pub fn observe(&self, position: usize, element: &Element, has_deferred_source: bool) -> bool {
        let Some(observer) = &self.observer else {
            return false;
        };
        let fresh = self
            .tracker
            .borrow_mut()
            .register(position, has_deferred_source);
        if fresh {
            observer.observe(element);
        }
        fresh
    }
}

/// Handle to the pass currently on screen.
pub type PassHandle = StoredValue<Option<RenderPass>, LocalStorage>;

/// Drop the pass on screen, disconnecting its observer.
fn retire(pass: PassHandle) {
    pass.update_value(|p| {
        p.take();
    });
}

// ============================================================================
// Card List
// ============================================================================

fn phase_class(phase: Phase) -> String {
    let modifier = match phase {
        Phase::Visible => css::visible,
        Phase::FadingOut => css::fadingOut,
        Phase::Hidden => css::hidden,
        Phase::FadingIn => css::fadingIn,
    };
    format!("{} {}", css::list, modifier)
}

/// Fade durations for the container's CSS transitions.
fn fade_style() -> String {
    format!(
        "--fade-out: {}; --fade-in: {};",
        format_ms(FADE_OUT_MS),
        format_ms(FADE_IN_MS)
    )
}

#[component]
pub fn CardList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let library = ctx.library;

    let pass: PassHandle = StoredValue::new_local(None);

    let content = move || {
        // Tear down the previous observer before anything new is observed
        retire(pass);

        match library.content.get() {
            Content::Skeleton => (0..SKELETON_CARDS)
                .map(|_| view! { <SkeletonCard /> })
                .collect::<Vec<_>>()
                .into_any(),
            Content::Failed(category) => view! {
                <div class=css::failure role="alert">{category.failure_message()}</div>
            }
            .into_any(),
            Content::Cards { items, .. } => {
                let cards = build_cards(&items);
                let render_pass = RenderPass::new(&cards);
                let views = cards
                    .into_iter()
                    .filter_map(|card| {
                        let reveal = render_pass.reveal(card.position)?;
                        Some(view! { <Card card=card reveal=reveal pass=pass /> })
                    })
                    .collect::<Vec<_>>();
                pass.set_value(Some(render_pass));
                views.into_any()
            }
        }
    };

    view! {
        <section
            class=move || phase_class(library.phase.get())
            style=fade_style()
            aria-busy=move || (library.phase.get() != Phase::Visible).to_string()
        >
            {content}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_style_follows_transition_config() {
        assert_eq!(
            fade_style(),
            format!("--fade-out: {}ms; --fade-in: {}ms;", FADE_OUT_MS, FADE_IN_MS)
        );
    }

    #[test]
    fn test_stylesheet_reads_fade_durations_from_properties() {
        let styles = include_str!("card_list.module.css");
        assert!(styles.contains("var(--fade-out)"));
        assert!(styles.contains("var(--fade-in)"));
        assert!(!styles.contains(&format!("{}ms", FADE_OUT_MS)));
        assert!(!styles.contains(&format!("{}ms", FADE_IN_MS)));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;
    use crate::models::Item;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Wait long enough for pending intersection callbacks to be delivered.
    const SETTLE_MS: u32 = 300;

    fn items(titles: &[&str]) -> Vec<Item> {
        titles
            .iter()
            .map(|t| Item {
                title: t.to_string(),
                cover_url: Some(format!("/covers/{}.jpg", t)),
                ..Default::default()
            })
            .collect()
    }

    /// A visible element tagged like a mounted card.
    fn card_element(position: usize) -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let el: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        el.set_attribute("data-position", &position.to_string())
            .unwrap();
        el.style().set_property("height", "40px").unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn test_observe_hands_each_card_to_observer_once() {
        let owner = Owner::new();
        owner.with(|| {
            let cards = build_cards(&items(&["A", "B", "One Piece", "C", "D", "E", "F"]));
            let pass = RenderPass::new(&cards);
            let elements: Vec<HtmlElement> = cards.iter().map(|c| card_element(c.position)).collect();

            for (card, el) in cards.iter().zip(&elements) {
                let deferred = card.priority == ImagePriority::Lazy;
                assert!(pass.observe(card.position, el, deferred));
            }
            for (card, el) in cards.iter().zip(&elements) {
                assert!(!pass.observe(card.position, el, false));
            }
            assert_eq!(pass.tracker.borrow().observed_count(), cards.len());

            for el in elements {
                el.remove();
            }
        });
    }

    #[wasm_bindgen_test]
    async fn test_live_pass_reveals_visible_card() {
        let owner = Owner::new();
        let (handle, reveal, el) = owner.with(|| {
            let cards = build_cards(&items(&["Mushishi"]));
            let pass = RenderPass::new(&cards);
            let reveal = pass.reveal(0).unwrap();
            let el = card_element(0);
            assert!(pass.observe(0, &el, false));
            let handle: PassHandle = StoredValue::new_local(Some(pass));
            (handle, reveal, el)
        });

        TimeoutFuture::new(SETTLE_MS).await;
        assert!(reveal.visible.get_untracked());

        retire(handle);
        el.remove();
    }

    #[wasm_bindgen_test]
    async fn test_retired_pass_stops_reveal_callbacks() {
        let owner = Owner::new();
        let (handle, reveal, el) = owner.with(|| {
            let cards = build_cards(&items(&["Planetes"]));
            let pass = RenderPass::new(&cards);
            let reveal = pass.reveal(0).unwrap();
            let el = card_element(0);
            assert!(pass.observe(0, &el, false));
            let handle: PassHandle = StoredValue::new_local(Some(pass));
            (handle, reveal, el)
        });

        retire(handle);
        assert!(handle.with_value(|p| p.is_none()));

        TimeoutFuture::new(SETTLE_MS).await;
        assert!(!reveal.visible.get_untracked());
        el.remove();
    }
}
