//! Scroll-driven visibility tracking.
//!
//! The page is one tall column and the viewport is the slice of it currently
//! on screen. [`VisibilityWatcher`] hands out one-shot registrations: when a
//! watched rect comes within its margin of the viewport, the registration
//! fires once and disengages. A fired watch is removed from the registry, so
//! no later scroll, resize, or repeated check can deliver it again.
//!
//! Widgets that need continuous visibility rather than a one-shot signal (the
//! chart restarting its entrance animation, the bubbles pausing their float)
//! use the free helpers at the bottom of this module.

use ratatui::layout::Rect;

/// Handle for cancelling a registration before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

#[derive(Debug)]
struct Watch<T> {
    id: WatchId,
    target: Rect,
    margin: u16,
    payload: T,
}

/// One-shot registry of page rects waiting to come into view.
///
/// Payloads are handed back by [`check`](Self::check) for the caller to
/// dispatch, which keeps all mutable app state in one place.
#[derive(Debug)]
pub struct VisibilityWatcher<T> {
    watches: Vec<Watch<T>>,
    next_id: u64,
}

impl<T> VisibilityWatcher<T> {
    pub fn new() -> Self {
        Self {
            watches: Vec::new(),
            next_id: 0,
        }
    }

    /// Watch `target` (page coordinates). The watch fires as soon as the
    /// target intersects the viewport expanded by `margin` rows above and
    /// below.
    pub fn register(&mut self, target: Rect, margin: u16, payload: T) -> WatchId {
        let id = WatchId(self.next_id);
        self.next_id += 1;
        self.watches.push(Watch {
            id,
            target,
            margin,
            payload,
        });
        id
    }

    /// Evaluate all live watches against the current viewport and return the
    /// payloads of those that fired, in registration order. Fired watches are
    /// removed.
    pub fn check(&mut self, viewport: Rect) -> Vec<T> {
        let mut fired = Vec::new();
        let mut remaining = Vec::with_capacity(self.watches.len());
        for watch in self.watches.drain(..) {
            if intersects_with_margin(watch.target, viewport, watch.margin) {
                fired.push(watch.payload);
            } else {
                remaining.push(watch);
            }
        }
        self.watches = remaining;
        fired
    }

    /// Remove a live watch. Returns `false` when the watch already fired or
    /// was cancelled before, which makes late cancels a harmless no-op.
    pub fn cancel(&mut self, id: WatchId) -> bool {
        let before = self.watches.len();
        self.watches.retain(|w| w.id != id);
        self.watches.len() != before
    }

    /// Number of registrations still waiting to fire.
    pub fn pending(&self) -> usize {
        self.watches.len()
    }
}

impl<T> Default for VisibilityWatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fraction of `target`'s rows currently inside `viewport`, from 0.0 to 1.0.
pub fn visible_fraction(target: Rect, viewport: Rect) -> f32 {
    if target.height == 0 {
        return 0.0;
    }
    let target_top = u32::from(target.y);
    let target_bottom = target_top + u32::from(target.height);
    let view_top = u32::from(viewport.y);
    let view_bottom = view_top + u32::from(viewport.height);
    let top = target_top.max(view_top);
    let bottom = target_bottom.min(view_bottom);
    if bottom <= top {
        return 0.0;
    }
    (bottom - top) as f32 / f32::from(target.height)
}

/// True when `target` overlaps `viewport` expanded by `margin` rows on both
/// ends. Horizontal overlap is required too, though page sections span the
/// full column width in practice.
pub fn intersects_with_margin(target: Rect, viewport: Rect, margin: u16) -> bool {
    let view_top = u32::from(viewport.y).saturating_sub(u32::from(margin));
    let view_bottom = u32::from(viewport.y) + u32::from(viewport.height) + u32::from(margin);
    let target_top = u32::from(target.y);
    let target_bottom = target_top + u32::from(target.height);

    let view_left = u32::from(viewport.x);
    let view_right = view_left + u32::from(viewport.width);
    let target_left = u32::from(target.x);
    let target_right = target_left + u32::from(target.width);

    target_top < view_bottom
        && target_bottom > view_top
        && target_left < view_right
        && target_right > view_left
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll: u16, height: u16) -> Rect {
        Rect::new(0, scroll, 100, height)
    }

    fn section(y: u16, height: u16) -> Rect {
        Rect::new(0, y, 100, height)
    }

    #[test]
    fn test_fires_once_within_margin() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register(section(100, 20), 25, "faq");

        // 100 - (0 + 40 + 25) >= 0: still out of reach.
        assert!(watcher.check(viewport(0, 40)).is_empty());

        // Viewport bottom at 76, margin 25 reaches row 101.
        assert_eq!(watcher.check(viewport(36, 40)), vec!["faq"]);
        assert_eq!(watcher.pending(), 0);
    }

    #[test]
    fn test_does_not_refire_after_scrolling_away_and_back() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register(section(50, 10), 0, 1u8);

        assert_eq!(watcher.check(viewport(45, 20)), vec![1]);
        assert!(watcher.check(viewport(0, 20)).is_empty());
        assert!(watcher.check(viewport(45, 20)).is_empty());
    }

    #[test]
    fn test_margin_boundary_exact() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register(section(65, 10), 5, ());

        // Viewport rows 0..=39, margin extends to row 44; target starts at 65.
        assert!(watcher.check(viewport(0, 40)).is_empty());
        // Rows 20..=59, margin reaches row 64: one short of the target.
        assert!(watcher.check(viewport(20, 40)).is_empty());
        // Rows 21..=60, margin reaches row 65.
        assert_eq!(watcher.check(viewport(21, 40)).len(), 1);
    }

    #[test]
    fn test_cancel_before_fire_suppresses() {
        let mut watcher = VisibilityWatcher::new();
        let id = watcher.register(section(10, 10), 0, "chart");
        assert!(watcher.cancel(id));
        assert!(watcher.check(viewport(0, 40)).is_empty());
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let mut watcher = VisibilityWatcher::new();
        let id = watcher.register(section(10, 10), 0, "chart");
        assert_eq!(watcher.check(viewport(0, 40)).len(), 1);
        assert!(!watcher.cancel(id));
        assert!(!watcher.cancel(id));
    }

    #[test]
    fn test_registrations_are_independent() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register(section(10, 10), 0, "near");
        let far = watcher.register(section(500, 10), 0, "far");

        assert_eq!(watcher.check(viewport(0, 40)), vec!["near"]);
        assert_eq!(watcher.pending(), 1);
        assert!(watcher.cancel(far));
        assert_eq!(watcher.pending(), 0);
    }

    #[test]
    fn test_fire_order_is_registration_order_within_pass() {
        let mut watcher = VisibilityWatcher::new();
        watcher.register(section(30, 5), 0, "b");
        watcher.register(section(10, 5), 0, "a");
        assert_eq!(watcher.check(viewport(0, 40)), vec!["b", "a"]);
    }

    #[test]
    fn test_visible_fraction() {
        let target = section(10, 10);
        assert_eq!(visible_fraction(target, viewport(0, 40)), 1.0);
        assert_eq!(visible_fraction(target, viewport(15, 40)), 0.5);
        assert_eq!(visible_fraction(target, viewport(20, 40)), 0.0);
        // Partially above the top edge.
        assert_eq!(visible_fraction(section(0, 20), viewport(10, 40)), 0.5);
    }

    #[test]
    fn test_zero_height_target_never_visible() {
        assert_eq!(visible_fraction(section(10, 0), viewport(0, 40)), 0.0);
    }

    #[test]
    fn test_horizontal_overlap_required() {
        let off_to_the_side = Rect::new(200, 10, 10, 10);
        assert!(!intersects_with_margin(off_to_the_side, viewport(0, 40), 0));
    }
}
