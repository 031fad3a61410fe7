//! Core page logic, independent of the component tree.
//!
//! This module provides:
//! - [`Library`] category list loading with a per-page cache
//! - [`TabController`] selection state and the loading flag
//! - [`Transition`] fade-out/swap/fade-in sequencing
//! - [`Pipeline`] one tab-switch cycle tying the above together
//! - [`build_cards`] and [`RevealTracker`] card rendering and lazy reveal
//! - [`SmoothScroll`] per-frame scroll physics

pub mod error;
pub mod library;
pub mod pipeline;
mod render;
mod reveal;
pub mod scroll;
pub mod tabs;
pub mod transition;

pub use library::{HttpSource, Library};
pub use pipeline::{LibraryView, Pipeline};
pub use render::build_cards;
pub use reveal::{RevealAction, RevealTracker};
pub use scroll::SmoothScroll;
pub use tabs::{IndicatorGeometry, LocalSelection, Span, SwitchGuard, TabController};
pub use transition::{BrowserClock, Transition};
