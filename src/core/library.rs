//! Category list loading with a per-page cache.
//!
//! [`Library::load`] returns the cached list for a category when one exists
//! and otherwise asks its [`ItemSource`]. Only successful loads are cached,
//! so a failed category is fetched again on the next request. Entries never
//! expire; a reload of the page is the only invalidation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::error::{FetchError, LoadError};
use crate::models::{Category, Item};
use crate::utils::fetch_json;

/// Shared, immutable item list for one category.
pub type ItemList = Arc<[Item]>;

/// Where category lists come from.
#[allow(async_fn_in_trait)]
pub trait ItemSource {
    /// Retrieve and decode the list for `category`.
    async fn fetch(&self, category: Category) -> Result<Vec<Item>, FetchError>;
}

/// Fetches `<category>.json` relative to the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

impl ItemSource for HttpSource {
    async fn fetch(&self, category: Category) -> Result<Vec<Item>, FetchError> {
        fetch_json::<Vec<Item>>(&category.resource_path()).await
    }
}

/// Fetcher plus in-memory cache.
pub struct Library<S> {
    source: S,
    cache: RefCell<HashMap<Category, ItemList>>,
}

impl<S: ItemSource> Library<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Cached list for `category`, without touching the network.
    pub fn cached(&self, category: Category) -> Option<ItemList> {
        self.cache.borrow().get(&category).cloned()
    }

    /// Whether `category` has been loaded successfully this session.
    pub fn is_cached(&self, category: Category) -> bool {
        self.cache.borrow().contains_key(&category)
    }

    /// Load the list for `category`, hitting the source at most once per
    /// category after a success.
    pub async fn load(&self, category: Category) -> Result<ItemList, LoadError> {
        if let Some(items) = self.cached(category) {
            log::debug!("cache hit for {}", category);
            return Ok(items);
        }

        let items: ItemList = self
            .source
            .fetch(category)
            .await
            .map_err(|source| LoadError { category, source })?
            .into();

        log::info!("loaded {} {} entries", items.len(), category);

        // A concurrent load may have landed first; keep its instance
        let stored = self
            .cache
            .borrow_mut()
            .entry(category)
            .or_insert(items)
            .clone();
        Ok(stored)
    }
}
