//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::Category;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as Books, LuCrown as Legendary, LuImageOff as ImageError, LuTv as Anime,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBook as Books, BsImage as ImageError, BsStarFill as Legendary, BsTv as Anime,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BOOKS, Books);
themed_icon!(ANIME, Anime);
themed_icon!(LEGENDARY, Legendary);
themed_icon!(IMAGE_ERROR, ImageError);

/// Tab icon for a category.
pub fn category_icon(category: Category) -> Icon {
    match category {
        Category::Books => BOOKS,
        Category::Anime => ANIME,
    }
}
