//! UI components built with Leptos.
//!
//! - [`Header`] - Site title and per-category stats
//! - [`TabBar`] - Category tabs with the sliding indicator
//! - [`CardList`] - Card grid, skeletons and load failures
//! - [`card`] - Single media card and cover image
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`ScrollLayer`] - Smooth scrolling and cursor effects

pub mod card;
pub mod card_list;
pub mod header;
pub mod icons;
pub mod scroll;
pub mod tabs;

pub use card_list::CardList;
pub use header::Header;
pub use scroll::ScrollLayer;
pub use tabs::TabBar;
