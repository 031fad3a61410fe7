//! Render-ready card view model.

/// Visual treatment of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    /// Regular card (default)
    #[default]
    Standard,
    /// One-off treatment for the sentinel title
    Legendary,
}

/// When a card's cover image should start loading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImagePriority {
    /// Loads immediately
    Eager,
    /// Source is assigned only once the card is revealed (default)
    #[default]
    Lazy,
}

impl ImagePriority {
    /// Value for the `loading` attribute.
    pub fn loading_attr(self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }
}

/// Rating shown in the card's meta row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatingLabel {
    pub text: String,
    /// True when the item has no rating and shows the TBR placeholder.
    pub is_tbr: bool,
}

/// Everything needed to paint one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Zero-based position in the list.
    pub position: usize,
    /// 1-based, zero-padded index label ("01", "02", ...).
    pub index_label: String,
    pub title: String,
    pub author: Option<String>,
    pub cover_url: Option<String>,
    pub thoughts: Option<String>,
    pub rating: RatingLabel,
    pub variant: CardVariant,
    pub priority: ImagePriority,
    /// Entrance animation delay.
    pub delay_ms: u32,
}

impl Card {
    pub fn is_legendary(&self) -> bool {
        self.variant == CardVariant::Legendary
    }
}
