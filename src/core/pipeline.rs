//! The tab-switch pipeline: transition, fetch-or-cache, render.
//!
//! A [`Pipeline`] owns every piece of mutable page state (cache, tab
//! selection, loading flag) so that UI code only holds a handle to it. One
//! cycle runs per accepted [`SwitchGuard`]; the guard is consumed by
//! [`Pipeline::run`] and dropped when the cycle ends.

use crate::core::library::{ItemSource, Library};
use crate::core::tabs::{SelectionStore, SwitchGuard, TabController};
use crate::core::transition::{Clock, Transition};
use crate::models::{Category, Content, Phase};

/// Sink for everything a pipeline cycle wants shown.
pub trait LibraryView {
    /// The active tab changed.
    fn select(&self, category: Category);
    /// The container's cross-fade phase changed.
    fn set_phase(&self, phase: Phase);
    /// Replace the container's contents.
    fn show(&self, content: Content);
}

/// Page state plus the collaborators needed to run a cycle.
pub struct Pipeline<S, P, C> {
    library: Library<S>,
    tabs: TabController<P>,
    transition: Transition,
    clock: C,
}

impl<S, P, C> Pipeline<S, P, C>
where
    S: ItemSource,
    P: SelectionStore,
    C: Clock,
{
    pub fn new(library: Library<S>, tabs: TabController<P>, transition: Transition, clock: C) -> Self {
        Self {
            library,
            tabs,
            transition,
            clock,
        }
    }

    #[cfg(test)]
    pub fn library(&self) -> &Library<S> {
        &self.library
    }

    pub fn tabs(&self) -> &TabController<P> {
        &self.tabs
    }

    /// Start the page-load cycle for the restored category.
    pub fn begin_initial(&self) -> Option<SwitchGuard> {
        self.tabs.begin_initial()
    }

    /// Accept a tab click, or `None` if it must be ignored.
    pub fn request(&self, target: Category) -> Option<SwitchGuard> {
        self.tabs.request(target)
    }

    /// Run one cycle for the guard's category.
    ///
    /// The content swap happens entirely while the container is hidden:
    /// skeleton (uncached categories only), then load, then cards or the
    /// failure message.
    pub async fn run(&self, guard: SwitchGuard, view: &impl LibraryView) {
        let category = guard.category();
        view.select(category);

        self.transition
            .run(
                &self.clock,
                |phase| view.set_phase(phase),
                async {
                    if !self.library.is_cached(category) {
                        view.show(Content::Skeleton);
                    }
                    match self.library.load(category).await {
                        Ok(items) => view.show(Content::Cards { category, items }),
                        Err(e) => {
                            log::error!("{}", e);
                            view.show(Content::Failed(category));
                        }
                    }
                },
            )
            .await;

        drop(guard);
    }
}
