//! Alignment rules for positioning a sprite inside the display frame.
//!
//! An [`Alignment`] names the frame edge(s) or center a sprite's position
//! is measured from. Resolution is a pure function of the alignment tag
//! and three extents: the frame size, the sprite size, and the edge
//! offset.

use crate::px::{Px, PxPosition, PxSize};

/// Specifies where a sprite is anchored relative to the display frame.
///
/// Offsets are always measured inward from whichever edge(s) the
/// alignment anchors to. Centered axes ignore the corresponding offset
/// component entirely: a centered sprite stays centered no matter what
/// offset it was built with.
///
/// # Variants
///
/// - `TopLeft`: offset inward from the top-left corner.
/// - `TopRight`: offset inward from the top-right corner.
/// - `TopCenter`: centered horizontally, offset down from the top edge.
/// - `BottomLeft`: offset inward from the bottom-left corner.
/// - `BottomRight`: offset inward from the bottom-right corner.
/// - `BottomCenter`: centered horizontally, offset up from the bottom
///   edge.
/// - `Center`: centered on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Offset inward from the top-left corner.
    TopLeft,
    /// Offset inward from the top-right corner.
    TopRight,
    /// Centered horizontally, offset down from the top edge.
    TopCenter,
    /// Offset inward from the bottom-left corner.
    BottomLeft,
    /// Offset inward from the bottom-right corner.
    BottomRight,
    /// Centered horizontally, offset up from the bottom edge.
    BottomCenter,
    /// Centered on both axes.
    Center,
}

impl Default for Alignment {
    /// Returns [`Alignment::TopLeft`] as the default value.
    ///
    /// # Example
    ///
    /// ```
    /// use hudlet::Alignment;
    /// assert_eq!(Alignment::default(), Alignment::TopLeft);
    /// ```
    fn default() -> Self {
        Self::TopLeft
    }
}

impl Alignment {
    /// Resolves the top-left drawing coordinate for a sprite of size
    /// `element` placed inside `frame` with the given edge `offset`.
    ///
    /// Total over all inputs: degenerate sizes or oversized offsets
    /// produce a coordinate that is negative or out of frame bounds, and
    /// that is accepted rather than guarded. Centering uses truncating
    /// integer division, biasing odd extents one pixel toward the origin
    /// edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use hudlet::{Alignment, Px, PxPosition, PxSize};
    ///
    /// let frame = PxSize::from([800, 600]);
    /// let bar = PxSize::from([182, 5]);
    /// let offset = PxSize::from([0, 24]);
    ///
    /// let position = Alignment::BottomCenter.resolve(frame, bar, offset);
    /// assert_eq!(position, PxPosition::new(Px::new(309), Px::new(571)));
    /// ```
    pub fn resolve(self, frame: PxSize, element: PxSize, offset: PxSize) -> PxPosition {
        match self {
            Alignment::TopLeft => PxPosition::new(offset.width, offset.height),
            Alignment::TopRight => {
                PxPosition::new(right_anchored_x(frame, element, offset), offset.height)
            }
            Alignment::TopCenter => PxPosition::new(centered_x(frame, element), offset.height),
            Alignment::BottomLeft => {
                PxPosition::new(offset.width, bottom_anchored_y(frame, element, offset))
            }
            Alignment::BottomRight => PxPosition::new(
                right_anchored_x(frame, element, offset),
                bottom_anchored_y(frame, element, offset),
            ),
            Alignment::BottomCenter => PxPosition::new(
                centered_x(frame, element),
                bottom_anchored_y(frame, element, offset),
            ),
            Alignment::Center => {
                PxPosition::new(centered_x(frame, element), centered_y(frame, element))
            }
        }
    }
}

/// X coordinate anchored to the right frame edge, offset inward.
fn right_anchored_x(frame: PxSize, element: PxSize, offset: PxSize) -> Px {
    frame.width - offset.width - element.width
}

/// Y coordinate anchored to the bottom frame edge, offset inward.
fn bottom_anchored_y(frame: PxSize, element: PxSize, offset: PxSize) -> Px {
    frame.height - offset.height - element.height
}

/// Horizontally centered x coordinate.
fn centered_x(frame: PxSize, element: PxSize) -> Px {
    frame.width / 2 - element.width / 2
}

/// Vertically centered y coordinate.
fn centered_y(frame: PxSize, element: PxSize) -> Px {
    frame.height / 2 - element.height / 2
}
