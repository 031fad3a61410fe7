//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Item`] - One logged book or series as stored in JSON
//! - [`Category`] - Content partitions selectable from the tab bar
//! - [`Card`], [`CardVariant`], [`ImagePriority`] - Render-ready card view model
//! - [`Phase`], [`Content`] - Card container state

mod card;
mod category;
mod item;
mod view;

pub use card::{Card, CardVariant, ImagePriority, RatingLabel};
pub use category::Category;
pub use item::Item;
pub use view::{Content, Phase};
