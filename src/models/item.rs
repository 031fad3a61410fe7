//! Media log entries as stored in the category JSON files.

use serde::{Deserialize, Serialize};

/// One logged book or series.
///
/// Items have no stable id; a card is identified by its position in the list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub rating_text: Option<String>,
    #[serde(default)]
    pub thoughts: Option<String>,
}

impl Item {
    /// Rating text, if present and not blank.
    pub fn rating(&self) -> Option<&str> {
        non_blank(self.rating_text.as_deref())
    }

    /// Author name, if present and not blank.
    pub fn author(&self) -> Option<&str> {
        non_blank(self.author.as_deref())
    }

    /// Cover URL, if present and not blank.
    pub fn cover(&self) -> Option<&str> {
        non_blank(self.cover_url.as_deref())
    }

    /// Free-form notes, if present and not blank.
    pub fn thoughts(&self) -> Option<&str> {
        non_blank(self.thoughts.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
