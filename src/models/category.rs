//! Content categories selectable from the tab bar.

use std::fmt;
use std::str::FromStr;

/// A content partition backed by its own JSON resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    /// Books (default)
    #[default]
    Books,
    /// Anime series
    Anime,
}

impl Category {
    /// Every category, in tab order.
    pub const ALL: [Category; 2] = [Category::Books, Category::Anime];

    /// Name used for persistence and resource lookup.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Books => "books",
            Self::Anime => "anime",
        }
    }

    /// Relative URL of the JSON list for this category.
    pub fn resource_path(self) -> String {
        format!("{}.json", self.as_str())
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Books => "Books",
            Self::Anime => "Anime",
        }
    }

    /// Count label for the statistics line (e.g. "1 Book", "12 Books").
    pub fn count_label(self, count: usize) -> String {
        let noun = match (self, count) {
            (Self::Books, 1) => "Book",
            (Self::Books, _) => "Books",
            (Self::Anime, _) => "Anime",
        };
        format!("{} {}", count, noun)
    }

    /// Message shown in place of the cards when this category fails to load.
    pub fn failure_message(self) -> String {
        format!(
            "Failed to load {}. Please ensure {} is valid.",
            self.label().to_lowercase(),
            self.resource_path()
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
