//! Page header with the site name and the statistics label.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::{APP_NAME, APP_TAGLINE};

stylance::import_crate_style!(css, "src/components/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let stats = Signal::derive(move || ctx.library.content.with(|c| c.stats_label()));

    view! {
        <header class=css::header>
            <h1 class=css::title>{APP_NAME}</h1>
            <p class=css::tagline>{APP_TAGLINE}</p>
            <span class=css::stats aria-live="polite">{stats}</span>
        </header>
    }
}
