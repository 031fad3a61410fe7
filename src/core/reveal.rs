//! Lazy-reveal bookkeeping for one render pass.
//!
//! The browser observer only reports which card positions crossed into the
//! viewport. [`RevealTracker`] decides what each report means: a card is
//! registered at most once, marked visible on its first intersection, and
//! its deferred image source is promoted exactly once.

use std::collections::HashSet;

/// What the UI should do in response to an intersection report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealAction {
    /// Add the visible marker to the card.
    pub mark_visible: bool,
    /// Move the deferred image source to the live `src`.
    pub promote_source: bool,
    /// Stop observing the card.
    pub unobserve: bool,
}

/// Per-pass reveal state keyed by card position.
#[derive(Debug, Default)]
pub struct RevealTracker {
    observed: HashSet<usize>,
    deferred: HashSet<usize>,
    visible: HashSet<usize>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card. Returns `false` if it was already registered, in
    /// which case the caller must not observe it again.
    pub fn register(&mut self, position: usize, has_deferred_source: bool) -> bool {
        if !self.observed.insert(position) {
            return false;
        }
        if has_deferred_source {
            self.deferred.insert(position);
        }
        true
    }

    /// Handle an intersection report for `position`.
    pub fn intersect(&mut self, position: usize) -> RevealAction {
        if !self.observed.contains(&position) || !self.visible.insert(position) {
            return RevealAction::default();
        }
        RevealAction {
            mark_visible: true,
            promote_source: self.deferred.remove(&position),
            unobserve: true,
        }
    }

    /// Number of registered cards.
    #[cfg(test)]
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    #[cfg(test)]
    pub fn is_visible(&self, position: usize) -> bool {
        self.visible.contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_once_per_card() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.register(0, true));
        assert!(!tracker.register(0, true));
        assert!(tracker.register(1, false));
        assert_eq!(tracker.observed_count(), 2);
    }

    #[test]
    fn test_first_intersection_reveals_and_promotes() {
        let mut tracker = RevealTracker::new();
        tracker.register(3, true);

        let action = tracker.intersect(3);
        assert_eq!(
            action,
            RevealAction {
                mark_visible: true,
                promote_source: true,
                unobserve: true,
            }
        );
        assert!(tracker.is_visible(3));
    }

    #[test]
    fn test_source_promoted_exactly_once() {
        let mut tracker = RevealTracker::new();
        tracker.register(0, true);

        assert!(tracker.intersect(0).promote_source);
        assert_eq!(tracker.intersect(0), RevealAction::default());
    }

    #[test]
    fn test_eager_card_is_revealed_without_promotion() {
        let mut tracker = RevealTracker::new();
        tracker.register(0, false);

        let action = tracker.intersect(0);
        assert!(action.mark_visible);
        assert!(!action.promote_source);
    }

    #[test]
    fn test_unregistered_card_is_ignored() {
        let mut tracker = RevealTracker::new();
        assert_eq!(tracker.intersect(9), RevealAction::default());
        assert!(!tracker.is_visible(9));
    }
}
