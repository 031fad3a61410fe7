//! Application configuration.
//!
//! Centralizes all tunable constants used throughout the application.
//! Timings and observer thresholds have no hard requirement behind them;
//! the values here are the shipped defaults.

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name shown in the page header.
pub const APP_NAME: &str = "Shelf";

/// Tagline shown under the site name.
pub const APP_TAGLINE: &str = "Things I've read and watched.";

/// Maximum level of messages forwarded to the browser console.
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Milliseconds per second, for converting frame timestamps.
pub const MS_PER_SECOND: f64 = 1000.0;

// =============================================================================
// Network Configuration
// =============================================================================

/// Network configuration.
pub mod network {
    /// Fetch request timeout in milliseconds.
    pub const FETCH_TIMEOUT_MS: i32 = 10000;
}

// =============================================================================
// Storage Configuration
// =============================================================================

/// Persisted state configuration.
pub mod storage {
    /// localStorage key holding the last selected category.
    pub const SELECTED_CATEGORY_KEY: &str = "selected-category";
}

// =============================================================================
// Transition Configuration
// =============================================================================

/// Cross-fade timing around content swaps (milliseconds).
pub mod transition {
    /// Time the container takes to fade to zero opacity.
    pub const FADE_OUT_MS: u32 = 300;
    /// Time the container takes to fade back in after the swap.
    pub const FADE_IN_MS: u32 = 400;
}

// =============================================================================
// Tab Configuration
// =============================================================================

/// Tab bar configuration.
pub mod tabs {
    /// Debounce window for recomputing the indicator on viewport resize.
    pub const RESIZE_DEBOUNCE_MS: f64 = 150.0;
}

// =============================================================================
// Render Configuration
// =============================================================================

/// Card rendering configuration.
pub mod render {
    /// Exact title that receives the legendary card treatment.
    pub const LEGENDARY_TITLE: &str = "One Piece";

    /// Label shown when an item has no rating yet.
    pub const TBR_LABEL: &str = "TBR";

    /// Number of leading cards whose covers load eagerly.
    pub const EAGER_IMAGE_COUNT: usize = 4;

    /// Entrance animation delay added per card position.
    pub const STAGGER_STEP_MS: u32 = 100;

    /// Upper bound on the entrance animation delay.
    pub const MAX_STAGGER_MS: u32 = 800;

    /// Placeholder cards shown while a category is being fetched.
    pub const SKELETON_CARDS: usize = 6;
}

// =============================================================================
// Lazy Reveal Configuration
// =============================================================================

/// Visibility observer configuration.
pub mod reveal {
    /// Margin around the viewport within which cards count as visible.
    pub const ROOT_MARGIN: &str = "0px 0px 100px 0px";

    /// Fraction of a card that must be inside the margin to reveal it.
    pub const THRESHOLD: f64 = 0.1;
}

// =============================================================================
// Smooth Scroll Configuration
// =============================================================================

/// Smooth scroll physics and visual effects.
pub mod scroll {
    /// Seconds a wheel-initiated scroll animation takes to settle.
    pub const DURATION_SECS: f64 = 1.2;

    /// Scale applied to raw wheel deltas.
    pub const WHEEL_MULTIPLIER: f64 = 1.0;

    /// Pixels per line for wheel events reported in lines.
    pub const LINE_HEIGHT_PX: f64 = 16.0;

    /// Degrees of card skew per pixel/frame of scroll velocity.
    pub const SKEW_FACTOR: f64 = 0.15;

    /// Skew magnitude cap in degrees.
    pub const MAX_SKEW_DEG: f64 = 6.0;

    /// Longest frame gap (seconds) fed into the physics step.
    pub const MAX_FRAME_DELTA_SECS: f64 = 0.25;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
