//! Smooth-scroll physics driven once per animation frame.
//!
//! Wheel input moves a target offset; each frame eases the page from where
//! the current animation started towards that target. The state also tracks
//! per-frame velocity, which the visual layer turns into a card skew.

use crate::config::scroll::{
    DURATION_SECS, LINE_HEIGHT_PX, MAX_FRAME_DELTA_SECS, MAX_SKEW_DEG, SKEW_FACTOR,
    WHEEL_MULTIPLIER,
};

/// `WheelEvent.deltaMode` values.
const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;

/// Exponential ease-out that settles at exactly 1.
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Convert a wheel delta to pixels according to its delta mode.
pub fn wheel_delta_px(delta: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        DOM_DELTA_LINE => delta * LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => delta * page_height,
        _ => delta,
    }
}

/// Whether a wheel event should drive the smooth scroll.
///
/// Ctrl+wheel is browser zoom and horizontal-only input has nothing to
/// animate; both are left to the browser.
pub fn intercepts_wheel(delta_y: f64, ctrl_key: bool) -> bool {
    !ctrl_key && delta_y != 0.0
}

/// Scroll position state for one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    from: f64,
    elapsed: f64,
    animating: bool,
    velocity: f64,
    last_tick: Option<f64>,
}

impl SmoothScroll {
    pub fn new(offset: f64) -> Self {
        Self {
            current: offset,
            target: offset,
            from: offset,
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Feed a wheel delta (pixels). `limit` is the maximum scroll offset.
    pub fn wheel(&mut self, delta_y: f64, limit: f64) {
        self.target = (self.target + delta_y * WHEEL_MULTIPLIER).clamp(0.0, limit.max(0.0));
        self.from = self.current;
        self.elapsed = 0.0;
        self.animating = true;
    }

    /// Adopt a native scroll offset (keyboard, scrollbar, anchor jump).
    /// Ignored while a wheel animation is running.
    pub fn sync(&mut self, native_offset: f64) {
        if self.animating {
            return;
        }
        self.current = native_offset;
        self.target = native_offset;
        self.from = native_offset;
    }

    /// Advance one frame. Returns the offset to apply, or `None` when idle.
    pub fn step(&mut self, now_secs: f64) -> Option<f64> {
        let delta = self
            .last_tick
            .map(|last| (now_secs - last).clamp(0.0, MAX_FRAME_DELTA_SECS))
            .unwrap_or(0.0);
        self.last_tick = Some(now_secs);

        if !self.animating {
            self.velocity = 0.0;
            return None;
        }

        let previous = self.current;
        self.elapsed += delta;
        let progress = (self.elapsed / DURATION_SECS).min(1.0);

        if progress >= 1.0 {
            self.current = self.target;
            self.animating = false;
        } else {
            self.current = self.from + (self.target - self.from) * ease_out_expo(progress);
        }
        self.velocity = self.current - previous;

        Some(self.current)
    }

    /// Card skew in degrees for the current velocity.
    pub fn skew_deg(&self) -> f64 {
        (self.velocity * SKEW_FACTOR).clamp(-MAX_SKEW_DEG, MAX_SKEW_DEG)
    }
}
