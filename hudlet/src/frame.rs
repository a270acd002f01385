//! Frame-size tracking and frame-relative positioning helpers.
//!
//! The host owns the display frame; this module only remembers the last
//! frame size a sprite was laid out against and answers whether the
//! current size has diverged, so alignment math runs once per resize
//! instead of once per draw call.

use crate::px::{Px, PxPosition, PxSize};

/// Default frame width before the first host query.
pub const DEFAULT_FRAME_WIDTH: Px = Px(427);

/// Default frame height before the first host query.
pub const DEFAULT_FRAME_HEIGHT: Px = Px(240);

/// Default frame size before the first host query.
pub const DEFAULT_FRAME_SIZE: PxSize = PxSize::new(DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT);

/// Remembers the last observed frame size and detects divergence.
///
/// The check and the baseline update are a single operation: when the
/// current size differs from the stored one, [`matches`](Self::matches)
/// commits the new size as it reports the mismatch, so callers never
/// need a second write to keep the baseline current.
///
/// # Examples
///
/// ```
/// use hudlet::{FrameTracker, PxSize};
///
/// let mut tracker = FrameTracker::new(PxSize::from([800, 600]));
/// assert!(tracker.matches(PxSize::from([800, 600])));
/// assert!(!tracker.matches(PxSize::from([1280, 720])));
/// // The mismatch committed the new baseline.
/// assert!(tracker.matches(PxSize::from([1280, 720])));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTracker {
    last: PxSize,
}

impl FrameTracker {
    /// Creates a tracker whose baseline is `initial`.
    pub const fn new(initial: PxSize) -> Self {
        Self { last: initial }
    }

    /// Returns `true` and leaves the baseline untouched when `current`
    /// equals the stored size; returns `false` and commits `current` as
    /// the new baseline when they differ.
    pub fn matches(&mut self, current: PxSize) -> bool {
        if self.last == current {
            true
        } else {
            self.last = current;
            false
        }
    }

    /// The last frame size this tracker observed.
    pub const fn last(&self) -> PxSize {
        self.last
    }
}

impl Default for FrameTracker {
    /// Returns a tracker with the [`DEFAULT_FRAME_SIZE`] baseline.
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_SIZE)
    }
}

/// Horizontally centered position for an element of the given width,
/// with `y` measured up from the bottom edge of `frame`.
pub fn centered_position(width: Px, y: Px, frame: PxSize) -> PxPosition {
    PxPosition::new(frame.width / 2 - width / 2, frame.height - y)
}

/// Maps a position expressed in the default frame grid
/// ([`DEFAULT_FRAME_SIZE`]) into the given frame, keeping the element at
/// the same place relative to the horizontal center and the bottom edge.
///
/// The y axis maps exactly; the x axis can land one pixel toward the
/// origin because the default grid width is odd and the centering halves
/// truncate.
///
/// # Examples
///
/// ```
/// use hudlet::{frame, Px, PxPosition};
///
/// let mapped = frame::scaled_position(Px::new(100), Px::new(200), frame::DEFAULT_FRAME_SIZE);
/// assert_eq!(mapped, PxPosition::new(Px::new(99), Px::new(200)));
/// ```
pub fn scaled_position(x: Px, y: Px, frame: PxSize) -> PxPosition {
    let coord_x = frame.width / 2 - (DEFAULT_FRAME_WIDTH - x) + DEFAULT_FRAME_WIDTH / 2;
    let coord_y = frame.height - (DEFAULT_FRAME_HEIGHT - y);
    PxPosition::new(coord_x, coord_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_leaves_state_on_equality() {
        let mut tracker = FrameTracker::new(PxSize::from([427, 240]));
        assert!(tracker.matches(PxSize::from([427, 240])));
        assert!(tracker.matches(PxSize::from([427, 240])));
        assert_eq!(tracker.last(), PxSize::from([427, 240]));
    }

    #[test]
    fn test_matches_commits_on_divergence() {
        let mut tracker = FrameTracker::default();
        assert_eq!(tracker.last(), DEFAULT_FRAME_SIZE);

        assert!(!tracker.matches(PxSize::from([800, 600])));
        assert_eq!(tracker.last(), PxSize::from([800, 600]));

        // One call both detected and committed; the next call matches.
        assert!(tracker.matches(PxSize::from([800, 600])));
    }

    #[test]
    fn test_centered_position() {
        let frame = PxSize::from([800, 600]);
        let position = centered_position(Px(182), Px(29), frame);
        assert_eq!(position, PxPosition::new(Px(309), Px(571)));
    }

    #[test]
    fn test_scaled_position_on_default_grid() {
        // y maps exactly; x loses one pixel to the odd default width.
        let position = scaled_position(Px(15), Px(15), DEFAULT_FRAME_SIZE);
        assert_eq!(position, PxPosition::new(Px(14), Px(15)));
    }

    #[test]
    fn test_scaled_position_tracks_bottom_edge() {
        // A point 10px above the bottom of the default grid stays 10px
        // above the bottom of a taller frame.
        let y = DEFAULT_FRAME_HEIGHT - Px(10);
        let mapped = scaled_position(Px(0), y, PxSize::from([427, 600]));
        assert_eq!(mapped.y, Px(590));
    }
}
