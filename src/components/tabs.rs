//! Category tab bar with a sliding active-tab indicator.
//!
//! The indicator is positioned from the active tab's bounding box relative
//! to the bar. It is recomputed whenever the active category changes and,
//! debounced, when the viewport is resized.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_debounce_fn;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::tabs::RESIZE_DEBOUNCE_MS;
use crate::core::IndicatorGeometry;
use crate::models::Category;
use crate::utils::dom::horizontal_span;

stylance::import_crate_style!(css, "src/components/tabs.module.css");

type TabRefs = [NodeRef<leptos::html::Button>; Category::ALL.len()];

/// Measure the active tab against the bar.
fn measure(
    bar: NodeRef<leptos::html::Div>,
    tabs: TabRefs,
    active: Category,
) -> Option<IndicatorGeometry> {
    let bar = bar.get_untracked()?;
    let index = Category::ALL.iter().position(|c| *c == active)?;
    let tab = tabs[index].get_untracked()?;
    Some(IndicatorGeometry::under(
        horizontal_span(&tab),
        horizontal_span(&bar),
    ))
}

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let category = ctx.library.category;

    let bar_ref = NodeRef::<leptos::html::Div>::new();
    let tab_refs: TabRefs = std::array::from_fn(|_| NodeRef::new());
    let indicator = RwSignal::new(None::<IndicatorGeometry>);

    let recompute = move || {
        if let Some(geometry) = measure(bar_ref, tab_refs, category.get_untracked()) {
            indicator.set(Some(geometry));
        }
    };

    // Follow the active tab, and run once the refs are mounted
    Effect::new(move || {
        category.track();
        let _ = bar_ref.get();
        for tab in tab_refs {
            let _ = tab.get();
        }
        recompute();
    });

    let debounced = use_debounce_fn(recompute, RESIZE_DEBOUNCE_MS);
    let resize = window_event_listener(ev::resize, move |_| {
        debounced();
    });
    on_cleanup(move || resize.remove());

    let indicator_style = move || {
        indicator
            .get()
            .map(|g| g.style())
            .unwrap_or_else(|| "opacity: 0;".to_string())
    };

    let tabs = Category::ALL
        .into_iter()
        .zip(tab_refs)
        .map(|(tab, node_ref)| {
            let is_active = Signal::derive(move || category.get() == tab);
            let class = move || {
                if is_active.get() {
                    format!("{} {}", css::tab, css::active)
                } else {
                    css::tab.to_string()
                }
            };
            view! {
                <button
                    node_ref=node_ref
                    class=class
                    role="tab"
                    aria-selected=move || is_active.get().to_string()
                    on:click=move |_| ctx.switch_to(tab)
                >
                    <span class=css::icon aria-hidden="true">
                        <Icon icon=ic::category_icon(tab) />
                    </span>
                    {tab.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=css::bar node_ref=bar_ref role="tablist" aria-label="Categories">
            {tabs}
            <span class=css::indicator style=indicator_style aria-hidden="true"></span>
        </div>
    }
}
