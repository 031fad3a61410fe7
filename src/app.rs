//! Root application module.
//!
//! Contains the main App component, AppContext definition, LibraryState,
//! and application-level setup logic following Leptos conventions.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{CardList, Header, ScrollLayer, TabBar};
use crate::core::{
    BrowserClock, HttpSource, Library, LibraryView, LocalSelection, Pipeline, SwitchGuard,
    TabController, Transition,
};
use crate::models::{Category, Content, Phase};

/// Pipeline wired to the browser: HTTP fetches, localStorage, `setTimeout`.
pub type AppPipeline = Pipeline<HttpSource, LocalSelection, BrowserClock>;

// ============================================================================
// LibraryState
// ============================================================================

/// Reactive mirror of what the pipeline wants on screen.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct LibraryState {
    /// Category whose tab is highlighted.
    pub category: RwSignal<Category>,
    /// Cross-fade phase of the card container.
    pub phase: RwSignal<Phase>,
    /// Skeleton, cards, or failure message.
    pub content: RwSignal<Content>,
}

impl LibraryState {
    pub fn new(category: Category) -> Self {
        Self {
            category: RwSignal::new(category),
            phase: RwSignal::new(Phase::Visible),
            content: RwSignal::new(Content::Skeleton),
        }
    }
}

impl LibraryView for LibraryState {
    fn select(&self, category: Category) {
        self.category.set(category);
    }

    fn set_phase(&self, phase: Phase) {
        self.phase.set(phase);
    }

    fn show(&self, content: Content) {
        self.content.set(content);
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`. The pipeline itself is not `Send`, so
/// it sits in a local [`StoredValue`] and only its handle travels with the
/// context.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive state rendered by the components.
    pub library: LibraryState,

    pipeline: StoredValue<Rc<AppPipeline>, LocalStorage>,
}

impl AppContext {
    /// Builds the pipeline and restores the persisted tab selection.
    pub fn new() -> Self {
        let pipeline = Pipeline::new(
            Library::new(HttpSource),
            TabController::restore(LocalSelection),
            Transition::default(),
            BrowserClock,
        );
        let library = LibraryState::new(pipeline.tabs().current());

        Self {
            library,
            pipeline: StoredValue::new_local(Rc::new(pipeline)),
        }
    }

    /// Runs the first cycle for the restored category.
    pub fn boot(&self) {
        let pipeline = self.pipeline.get_value();
        match pipeline.begin_initial() {
            Some(guard) => {
                log::info!("restoring {} tab", guard.category());
                self.spawn_cycle(pipeline, guard);
            }
            None => log::warn!("boot skipped: a switch is already running"),
        }
    }

    /// Handles a tab click. Ignored for the active tab or while busy.
    pub fn switch_to(&self, category: Category) {
        let pipeline = self.pipeline.get_value();
        if let Some(guard) = pipeline.request(category) {
            self.spawn_cycle(pipeline, guard);
        }
    }

    fn spawn_cycle(&self, pipeline: Rc<AppPipeline>, guard: SwitchGuard) {
        let view = self.library;
        spawn_local(async move {
            pipeline.run(guard, &view).await;
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App
// ============================================================================

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the first pipeline cycle once mounted
/// - Starts the smooth-scroll layer
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Reads nothing reactive, so this runs once after mount
    Effect::new(move || ctx.boot());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fatal>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <ScrollLayer />
            <main class=css::page>
                <Header />
                <TabBar />
                <CardList />
            </main>
        </ErrorBoundary>
    }
}
