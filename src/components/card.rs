//! Single media card and its cover image.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::card_list::PassHandle;
use crate::components::icons as ic;
use crate::core::RevealAction;
use crate::models::{Card as CardModel, ImagePriority};
use crate::utils::format::format_ms;

stylance::import_crate_style!(css, "src/components/card.module.css");

// ============================================================================
// Reveal State
// ============================================================================

/// Per-card signals driven by the visibility observer.
#[derive(Clone, Copy)]
pub struct CardReveal {
    /// Entrance animation may run.
    pub visible: RwSignal<bool>,
    /// The cover's real source has been assigned.
    pub source_live: RwSignal<bool>,
}

impl CardReveal {
    /// Eager covers get their source immediately; lazy ones wait for reveal.
    pub fn new(eager: bool) -> Self {
        Self {
            visible: RwSignal::new(false),
            source_live: RwSignal::new(eager),
        }
    }

    pub fn apply(&self, action: RevealAction) {
        if action.mark_visible {
            self.visible.set(true);
        }
        if action.promote_source {
            self.source_live.set(true);
        }
    }

    /// Reveal without waiting for the observer.
    pub fn reveal_now(&self) {
        self.visible.set(true);
        self.source_live.set(true);
    }
}

/// Load state of a cover image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ImageState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

// ============================================================================
// Card
// ============================================================================

#[component]
pub fn Card(card: CardModel, reveal: CardReveal, pass: PassHandle) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Article>::new();
    let position = card.position;
    let has_deferred_source = card.cover_url.is_some() && card.priority == ImagePriority::Lazy;

    // Register with the current render pass once mounted
    Effect::new(move || {
        if let Some(el) = node_ref.get() {
            pass.with_value(|p| {
                if let Some(p) = p {
                    p.observe(position, &el, has_deferred_source);
                }
            });
        }
    });

    let legendary = card.is_legendary();
    let class = move || {
        let mut classes = vec![css::card];
        if legendary {
            classes.push(css::legendary);
        }
        if reveal.visible.get() {
            classes.push(css::visible);
        }
        classes.join(" ")
    };

    let rating_class = if card.rating.is_tbr {
        format!("{} {}", css::rating, css::tbr)
    } else {
        css::rating.to_string()
    };

    let variant = if legendary { "legendary" } else { "standard" };
    let style = format!("--enter-delay: {};", format_ms(card.delay_ms));
    let title = card.title.clone();

    view! {
        <article
            node_ref=node_ref
            class=class
            style=style
            data-position=position.to_string()
            data-variant=variant
        >
            {legendary.then(|| view! {
                <div class=css::legendaryGlow aria-hidden="true"></div>
            })}
            <div class=css::index>{card.index_label}</div>
            {card.cover_url.map(|url| view! {
                <CardCover url=url alt=title priority=card.priority reveal=reveal />
            })}
            <div class=css::content>
                <div class=css::meta>
                    <span class=rating_class>{card.rating.text}</span>
                    {legendary.then(|| view! {
                        <span class=css::legendaryBadge title="Legendary">
                            <Icon icon=ic::LEGENDARY />
                        </span>
                    })}
                </div>
                <h2 class=css::title>{card.title}</h2>
                {card.author.map(|author| view! {
                    <div class=css::author>"by " {author}</div>
                })}
                {card.thoughts.map(|thoughts| view! {
                    <blockquote class=css::thoughts>{thoughts}</blockquote>
                })}
            </div>
        </article>
    }
}

/// Cover image with lazy source promotion and an inline error placeholder.
#[component]
fn CardCover(
    url: String,
    alt: String,
    priority: ImagePriority,
    reveal: CardReveal,
) -> impl IntoView {
    let state = RwSignal::new(ImageState::Loading);
    let failed = Memo::new(move |_| state.get() == ImageState::Failed);

    let src = move || reveal.source_live.get().then(|| url.clone());
    let img_class = move || {
        if state.get() == ImageState::Loaded {
            format!("{} {}", css::cover, css::loaded)
        } else {
            css::cover.to_string()
        }
    };

    view! {
        <Show
            when=move || !failed.get()
            fallback=|| view! {
                <div class=css::coverError role="img" aria-label="Cover unavailable">
                    <Icon icon=ic::IMAGE_ERROR />
                </div>
            }
        >
            <div class=css::coverContainer>
                <img
                    class=img_class
                    src=src.clone()
                    alt=alt.clone()
                    loading=priority.loading_attr()
                    decoding="async"
                    on:load=move |_| state.set(ImageState::Loaded)
                    on:error=move |_| {
                        log::warn!("cover failed to load");
                        state.set(ImageState::Failed);
                    }
                />
            </div>
        </Show>
    }
}

/// Placeholder card shown while a category loads.
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <article class=format!("{} {}", css::card, css::skeleton) aria-hidden="true">
            <div class=css::skeletonCover></div>
            <div class=css::content>
                <div class=css::skeletonLine></div>
                <div class=css::skeletonLineShort></div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    const STYLES: &str = include_str!("card.module.css");

    /// Body of the first rule whose selector is exactly `selector`.
    fn rule(selector: &str) -> &'static str {
        let start = STYLES
            .find(&format!("{} {{", selector))
            .expect("rule present");
        let body = &STYLES[start..];
        &body[..body.find('}').expect("rule closed")]
    }

    #[test]
    fn test_scroll_skew_is_not_delayed_by_entrance_transition() {
        let card = rule(".card");
        assert!(card.contains("var(--scroll-skew"));

        let transition = card
            .split("transition:")
            .nth(1)
            .and_then(|t| t.split(';').next())
            .expect("card transition declared");
        assert!(transition.contains("var(--enter-delay"));
        assert!(!transition.contains("transform"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use gloo_timers::future::TimeoutFuture;
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// 1x1 transparent GIF.
    const PIXEL: &str =
        "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

    fn count(root: &HtmlElement, class: &str) -> u32 {
        root.query_selector_all(&format!(".{}", class))
            .map(|nodes| nodes.length())
            .unwrap_or(0)
    }

    #[wasm_bindgen_test]
    async fn test_broken_cover_shows_placeholder_for_that_card_only() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&root).unwrap();

        let handle = mount_to(root.clone(), || {
            view! {
                <CardCover
                    url=PIXEL.to_string()
                    alt="Mushishi".to_string()
                    priority=ImagePriority::Eager
                    reveal=CardReveal::new(true)
                />
                <CardCover
                    url="/missing-cover.png".to_string()
                    alt="Planetes".to_string()
                    priority=ImagePriority::Eager
                    reveal=CardReveal::new(true)
                />
            }
        });

        TimeoutFuture::new(500).await;
        assert_eq!(count(&root, css::coverError), 1);
        assert_eq!(count(&root, css::coverContainer), 1);
        assert_eq!(count(&root, css::loaded), 1);

        drop(handle);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_lazy_cover_has_no_source_until_revealed() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&root).unwrap();

        let reveal = CardReveal::new(false);
        let handle = mount_to(root.clone(), move || {
            view! {
                <CardCover
                    url=PIXEL.to_string()
                    alt="Frieren".to_string()
                    priority=ImagePriority::Lazy
                    reveal=reveal
                />
            }
        });

        let img = root.query_selector("img").unwrap().unwrap();
        assert!(!img.has_attribute("src"));

        drop(handle);
        root.remove();
    }
}
