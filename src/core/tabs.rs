//! Tab selection state and the switch-in-progress flag.
//!
//! [`TabController::request`] hands out a [`SwitchGuard`] when a switch is
//! accepted. The loading flag stays raised for as long as the guard lives,
//! so whichever path ends a pipeline cycle (success, failure, early return)
//! re-enables switching by dropping it.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::storage::SELECTED_CATEGORY_KEY;
use crate::core::error::StorageError;
use crate::models::Category;
use crate::utils::dom;

// =============================================================================
// Persisted Selection
// =============================================================================

/// Durable storage for the last selected category.
pub trait SelectionStore {
    fn load(&self) -> Option<Category>;
    fn save(&self, category: Category) -> Result<(), StorageError>;
}

/// Selection persisted in `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSelection;

impl SelectionStore for LocalSelection {
    fn load(&self) -> Option<Category> {
        let storage = dom::local_storage()?;
        let value = storage.get_item(SELECTED_CATEGORY_KEY).ok()??;
        match value.parse() {
            Ok(category) => Some(category),
            Err(e) => {
                log::warn!("ignoring stored selection: {}", e);
                None
            }
        }
    }

    fn save(&self, category: Category) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
        storage
            .set_item(SELECTED_CATEGORY_KEY, category.as_str())
            .map_err(|_| StorageError::SaveFailed)
    }
}

// =============================================================================
// Tab Controller
// =============================================================================

/// Current category plus the single loading flag.
pub struct TabController<P> {
    current: Cell<Category>,
    loading: Rc<Cell<bool>>,
    store: P,
}

impl<P: SelectionStore> TabController<P> {
    /// Restore the last persisted selection, defaulting to books.
    pub fn restore(store: P) -> Self {
        let current = store.load().unwrap_or_default();
        Self {
            current: Cell::new(current),
            loading: Rc::new(Cell::new(false)),
            store,
        }
    }

    pub fn current(&self) -> Category {
        self.current.get()
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Raise the loading flag for the restored category on page load.
    ///
    /// Unlike [`request`](Self::request) this does not skip the current
    /// category, since nothing has been rendered yet.
    pub fn begin_initial(&self) -> Option<SwitchGuard> {
        self.acquire(self.current.get())
    }

    /// Accept a switch to `target`, or return `None` when `target` is already
    /// active or another switch is still running.
    pub fn request(&self, target: Category) -> Option<SwitchGuard> {
        if target == self.current.get() {
            return None;
        }
        let guard = self.acquire(target)?;
        self.current.set(target);
        if let Err(e) = self.store.save(target) {
            log::warn!("could not persist selection {}: {}", target, e);
        }
        Some(guard)
    }

    fn acquire(&self, category: Category) -> Option<SwitchGuard> {
        if self.loading.get() {
            log::debug!("switch to {} dropped: another switch is running", category);
            return None;
        }
        self.loading.set(true);
        Some(SwitchGuard {
            category,
            loading: Rc::clone(&self.loading),
        })
    }
}

/// Proof that a switch is in progress. Dropping it clears the loading flag.
#[derive(Debug)]
#[must_use = "dropping the guard immediately ends the switch"]
pub struct SwitchGuard {
    category: Category,
    loading: Rc<Cell<bool>>,
}

impl SwitchGuard {
    pub fn category(&self) -> Category {
        self.category
    }
}

impl Drop for SwitchGuard {
    fn drop(&mut self) {
        self.loading.set(false);
    }
}

// =============================================================================
// Indicator Geometry
// =============================================================================

/// Horizontal extent of an element in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

/// Position of the active-tab indicator inside the tab bar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IndicatorGeometry {
    pub left: f64,
    pub width: f64,
}

impl IndicatorGeometry {
    /// Place the indicator under `tab`, relative to its `container`.
    pub fn under(tab: Span, container: Span) -> Self {
        Self {
            left: tab.left - container.left,
            width: tab.width,
        }
    }

    /// Inline style for the indicator element.
    pub fn style(&self) -> String {
        format!(
            "transform: translateX({:.2}px); width: {:.2}px;",
            self.left, self.width
        )
    }
}
