//! Physical pixel coordinate system for hudlet.
//!
//! This module provides the value types the layout engine computes with:
//!
//! - [`Px`] - a single physical pixel value that supports negative values
//!   for off-screen positioning
//! - [`PxPosition`] - a 2D position in pixel space (x, y)
//! - [`PxSize`] - a 2D extent in pixel space (width, height), updatable in
//!   place
//! - [`FrozenPxSize`] - an extent fixed at construction, with no mutating
//!   operation in its interface
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the frame
//! - X-axis increases to the right
//! - Y-axis increases downward
//! - Negative coordinates are legal and simply render off screen
//!
//! # Example
//!
//! ```
//! use hudlet::{Px, PxPosition, PxSize};
//!
//! let size = PxSize::new(Px::new(182), Px::new(5));
//! let position = PxPosition::new(Px::new(309), Px::new(571));
//! let nudged = position.offset(Px::new(0), Px::new(-2));
//! assert_eq!(nudged.y, Px::new(569));
//! ```

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A physical pixel value.
///
/// Wraps a signed integer so that positions may legitimately go negative
/// when an offset exceeds the frame size. Division truncates toward zero,
/// which is what biases centered placement one pixel toward the origin
/// edge for odd extents.
///
/// # Examples
///
/// ```
/// use hudlet::Px;
///
/// let a = Px::new(10);
/// let b = Px::new(-4);
/// assert_eq!(a + b, Px::new(6));
/// assert_eq!(Px::new(5) / 2, Px::new(2));
/// assert_eq!(Px::new(-5) / 2, Px::new(-2));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` from an i32 value. Negative values are allowed.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Saturating addition, clamping at the numeric bounds.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction, clamping at the numeric bounds.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Mul<i32> for Px {
    type Output = Px;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl Div<i32> for Px {
    type Output = Px;

    /// Truncating division, rounding toward zero.
    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

/// A 2D position in physical pixel space.
///
/// A plain pair with no invariants; both axes may be negative.
///
/// # Examples
///
/// ```
/// use hudlet::{Px, PxPosition};
///
/// let mut position = PxPosition::new(Px::new(10), Px::new(72));
/// position.update(Px::new(15), Px::new(15));
/// assert_eq!(position, PxPosition::new(Px::new(15), Px::new(15)));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels.
    pub x: Px,
    /// The y-coordinate in physical pixels.
    pub y: Px,
}

impl PxPosition {
    /// The zero position (0, 0).
    pub const ZERO: Self = Self {
        x: Px(0),
        y: Px(0),
    };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Overwrites both coordinates in place.
    pub fn update(&mut self, x: Px, y: Px) {
        self.x = x;
        self.y = y;
    }

    /// Returns this position translated by the given deltas.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for PxPosition {
    type Output = PxPosition;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for PxPosition {
    type Output = PxPosition;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<[i32; 2]> for PxPosition {
    fn from(value: [i32; 2]) -> Self {
        Self {
            x: Px(value[0]),
            y: Px(value[1]),
        }
    }
}

/// A 2D extent in physical pixel space.
///
/// Used both for frame dimensions and element dimensions. Components are
/// expected to be non-negative by convention, but this is not enforced
/// here; degenerate sizes are a configuration warning at the sprite
/// level, never a hard failure.
///
/// # Examples
///
/// ```
/// use hudlet::{Px, PxSize};
///
/// let mut frame = PxSize::new(Px::new(427), Px::new(240));
/// frame.update(Px::new(800), Px::new(600));
/// assert_eq!(frame, PxSize::new(Px::new(800), Px::new(600)));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// The extent along the x axis.
    pub width: Px,
    /// The extent along the y axis.
    pub height: Px,
}

impl PxSize {
    /// A zero-area size.
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Overwrites both extents in place.
    pub fn update(&mut self, width: Px, height: Px) {
        self.width = width;
        self.height = height;
    }
}

impl From<[i32; 2]> for PxSize {
    fn from(value: [i32; 2]) -> Self {
        Self {
            width: Px(value[0]),
            height: Px(value[1]),
        }
    }
}

/// A 2D extent fixed at construction.
///
/// The frozen counterpart of [`PxSize`]: there is no mutating operation
/// in its interface, so an illegal update is unrepresentable rather than
/// a runtime failure. Sprites use this for their own size and offset,
/// which never change after construction.
///
/// # Examples
///
/// ```
/// use hudlet::{FrozenPxSize, Px, PxSize};
///
/// let frozen = FrozenPxSize::from(PxSize::new(Px::new(123), Px::new(48)));
/// assert_eq!(frozen.width(), Px::new(123));
/// assert_eq!(frozen.get(), PxSize::new(Px::new(123), Px::new(48)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrozenPxSize {
    width: Px,
    height: Px,
}

impl FrozenPxSize {
    /// Creates a new frozen size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// The extent along the x axis.
    pub const fn width(self) -> Px {
        self.width
    }

    /// The extent along the y axis.
    pub const fn height(self) -> Px {
        self.height
    }

    /// Returns the extent as a plain [`PxSize`] copy.
    pub const fn get(self) -> PxSize {
        PxSize {
            width: self.width,
            height: self.height,
        }
    }
}

impl From<PxSize> for FrozenPxSize {
    fn from(size: PxSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_creation() {
        assert_eq!(Px::new(42).raw(), 42);
        assert_eq!(Px::new(-10).raw(), -10);
    }

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10);
        let b = Px(5);

        assert_eq!(a + b, Px(15));
        assert_eq!(a - b, Px(5));
        assert_eq!(a * 2, Px(20));
        assert_eq!(a / 2, Px(5));
        assert_eq!(-a, Px(-10));
    }

    #[test]
    fn test_px_division_truncates_toward_zero() {
        assert_eq!(Px(5) / 2, Px(2));
        assert_eq!(Px(-5) / 2, Px(-2));
        assert_eq!(Px(1) / 2, Px(0));
    }

    #[test]
    fn test_px_saturating_arithmetic() {
        let max = Px(i32::MAX);
        let min = Px(i32::MIN);
        assert_eq!(max.saturating_add(Px(1)), max);
        assert_eq!(min.saturating_sub(Px(1)), min);
    }

    #[test]
    fn test_position_update_and_offset() {
        let mut pos = PxPosition::new(Px(10), Px(-5));
        pos.update(Px(3), Px(4));
        assert_eq!(pos, PxPosition::new(Px(3), Px(4)));

        let moved = pos.offset(Px(-3), Px(6));
        assert_eq!(moved, PxPosition::new(Px(0), Px(10)));
    }

    #[test]
    fn test_position_arithmetic() {
        let a = PxPosition::new(Px(10), Px(20));
        let b = PxPosition::new(Px(5), Px(15));
        assert_eq!(a + b, PxPosition::new(Px(15), Px(35)));
        assert_eq!(a - b, PxPosition::new(Px(5), Px(5)));
    }

    #[test]
    fn test_size_update() {
        let mut size = PxSize::new(Px(427), Px(240));
        assert_eq!(size, PxSize::from([427, 240]));

        size.update(Px(800), Px(600));
        assert_eq!(size, PxSize::from([800, 600]));
    }

    #[test]
    fn test_frozen_size_round_trip() {
        let size = PxSize::new(Px(37), Px(46));
        let frozen = FrozenPxSize::from(size);
        assert_eq!(frozen.width(), Px(37));
        assert_eq!(frozen.height(), Px(46));
        assert_eq!(frozen.get(), size);
    }
}
