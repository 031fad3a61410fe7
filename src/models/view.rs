//! State of the card container as seen by the UI.

use std::sync::Arc;

use super::{Category, Item};

/// Cross-fade phase of the card container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Fully opaque, idle (default)
    #[default]
    Visible,
    /// Opacity animating towards zero
    FadingOut,
    /// At zero opacity; content may be swapped
    Hidden,
    /// Opacity animating back to one
    FadingIn,
}

/// What the card container currently shows.
#[derive(Clone, Debug, Default)]
pub enum Content {
    /// Placeholder cards while a fetch is in flight (default)
    #[default]
    Skeleton,
    /// A loaded list for a category
    Cards {
        category: Category,
        items: Arc<[Item]>,
    },
    /// The category could not be loaded
    Failed(Category),
}

impl Content {
    /// Text for the statistics label.
    pub fn stats_label(&self) -> String {
        match self {
            Self::Skeleton => "Loading…".to_string(),
            Self::Cards { category, items } => category.count_label(items.len()),
            Self::Failed(_) => String::new(),
        }
    }
}

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Skeleton, Self::Skeleton) => true,
            (
                Self::Cards { category, items },
                Self::Cards {
                    category: other_category,
                    items: other_items,
                },
            ) => category == other_category && Arc::ptr_eq(items, other_items),
            (Self::Failed(a), Self::Failed(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_label() {
        let items: Arc<[Item]> = vec![Item::default(), Item::default()].into();
        let content = Content::Cards {
            category: Category::Books,
            items,
        };
        assert_eq!(content.stats_label(), "2 Books");
        assert_eq!(Content::Skeleton.stats_label(), "Loading…");
        assert_eq!(Content::Failed(Category::Anime).stats_label(), "");
    }

    #[test]
    fn test_cards_compare_by_instance() {
        let a: Arc<[Item]> = vec![Item::default()].into();
        let b: Arc<[Item]> = vec![Item::default()].into();
        let cards = |items: &Arc<[Item]>| Content::Cards {
            category: Category::Books,
            items: items.clone(),
        };
        assert_eq!(cards(&a), cards(&a));
        assert_ne!(cards(&a), cards(&b));
    }
}
