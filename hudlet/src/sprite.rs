//! Frame-aligned sprites with memoized positioning.
//!
//! A [`Sprite`] combines a fixed size, an [`Alignment`], an edge offset
//! and a texture UV origin, and caches the top-left drawing coordinate
//! computed against the last known frame size. [`Sprite::refresh`] runs
//! the alignment math again only when the frame size actually changed.
//!
//! ## Usage
//!
//! ```
//! use hudlet::{Alignment, Px, PxPosition, PxSize, Sprite, SpriteArgs};
//!
//! let xp_bar = Sprite::new(
//!     SpriteArgs::new("game:gui/icons.png".parse().unwrap())
//!         .alignment(Alignment::BottomCenter)
//!         .offset(PxSize::from([0, 24]))
//!         .size(PxSize::from([182, 5]))
//!         .uv(PxPosition::from([0, 79])),
//!     PxSize::from([800, 600]),
//! );
//! assert_eq!(xp_bar.x(), Px::new(309));
//! assert_eq!(xp_bar.y(), Px::new(571));
//! ```

use derive_setters::Setters;
use tracing::warn;

use crate::alignment::Alignment;
use crate::frame::FrameTracker;
use crate::px::{FrozenPxSize, Px, PxPosition, PxSize};
use crate::texture::TextureLocation;

/// Arguments for building a [`Sprite`].
///
/// Created with [`SpriteArgs::new`] and refined through fluent setters;
/// everything except the texture has a usable default.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct SpriteArgs {
    /// Texture location for the sprite, opaque to layout.
    pub texture: TextureLocation,
    /// Alignment of the sprite relative to the display frame.
    pub alignment: Alignment,
    /// Offset from the frame edge(s) the alignment anchors to.
    pub offset: PxSize,
    /// UV mapping origin within the texture.
    pub uv: PxPosition,
    /// Size of the sprite on screen.
    pub size: PxSize,
}

impl SpriteArgs {
    /// Creates args for the given texture with default placement:
    /// top-left alignment, zero offset, zero UV origin, zero size.
    pub fn new(texture: TextureLocation) -> Self {
        Self {
            texture,
            alignment: Alignment::default(),
            offset: PxSize::ZERO,
            uv: PxPosition::ZERO,
            size: PxSize::ZERO,
        }
    }
}

/// A sprite positioned relative to the display frame, ready to be drawn.
///
/// The cached position always equals the alignment resolution against
/// the last tracked frame size; [`refresh`](Self::refresh) keeps that
/// invariant as the frame resizes. Size and offset are frozen for the
/// sprite's lifetime.
///
/// A `Sprite` is not synchronized; the `&mut self` receiver on `refresh`
/// confines it to one caller at a time, matching the single-threaded
/// frame loop it is meant for.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    texture: TextureLocation,
    alignment: Alignment,
    offset: FrozenPxSize,
    size: FrozenPxSize,
    uv: PxPosition,
    frame: FrameTracker,
    position: PxPosition,
    recomputes: u64,
}

impl Sprite {
    /// Builds a sprite and computes its initial position against
    /// `initial_frame`.
    ///
    /// A size of 1 or less on either axis is a configuration warning,
    /// not a failure: the warning is logged and the degenerate sprite is
    /// still produced, so a misconfigured overlay renders wrong rather
    /// than taking the host down.
    pub fn new(args: SpriteArgs, initial_frame: PxSize) -> Self {
        let SpriteArgs {
            texture,
            alignment,
            offset,
            uv,
            size,
        } = args;

        if size.width.raw() <= 1 || size.height.raw() <= 1 {
            warn!(
                texture = %texture,
                width = size.width.raw(),
                height = size.height.raw(),
                "invalid sprite size"
            );
        }

        let position = alignment.resolve(initial_frame, size, offset);
        Self {
            texture,
            alignment,
            offset: offset.into(),
            size: size.into(),
            uv,
            frame: FrameTracker::new(initial_frame),
            position,
            recomputes: 1,
        }
    }

    /// Brings the cached position up to date with `current_frame` and
    /// returns it.
    ///
    /// The alignment math runs only when the frame size diverges from
    /// the tracked one; otherwise this is a cache read. Call once per
    /// frame tick before drawing.
    ///
    /// # Examples
    ///
    /// ```
    /// use hudlet::{Alignment, Px, PxSize, Sprite, SpriteArgs};
    ///
    /// let mut sprite = Sprite::new(
    ///     SpriteArgs::new("game:gui/icons.png".parse().unwrap())
    ///         .alignment(Alignment::TopRight)
    ///         .offset(PxSize::from([15, 15]))
    ///         .size(PxSize::from([123, 48])),
    ///     PxSize::from([427, 240]),
    /// );
    /// assert_eq!(sprite.x(), Px::new(289));
    ///
    /// // Window grew: the position follows the right edge.
    /// let moved = sprite.refresh(PxSize::from([854, 240]));
    /// assert_eq!(moved.x, Px::new(716));
    /// ```
    pub fn refresh(&mut self, current_frame: PxSize) -> PxPosition {
        if !self.frame.matches(current_frame) {
            self.position = self
                .alignment
                .resolve(current_frame, self.size.get(), self.offset.get());
            self.recomputes += 1;
        }
        self.position
    }

    /// The cached position in the frame.
    pub const fn position(&self) -> PxPosition {
        self.position
    }

    /// The cached position along the x axis.
    pub const fn x(&self) -> Px {
        self.position.x
    }

    /// The cached position along the y axis.
    pub const fn y(&self) -> Px {
        self.position.y
    }

    /// The sprite size on screen.
    pub const fn size(&self) -> PxSize {
        self.size.get()
    }

    /// The sprite width.
    pub const fn width(&self) -> Px {
        self.size.width()
    }

    /// The sprite height.
    pub const fn height(&self) -> Px {
        self.size.height()
    }

    /// The edge offset the sprite was built with.
    pub const fn offset(&self) -> PxSize {
        self.offset.get()
    }

    /// The UV mapping origin.
    pub const fn uv(&self) -> PxPosition {
        self.uv
    }

    /// The UV mapping coordinate along the x axis.
    pub const fn u(&self) -> Px {
        self.uv.x
    }

    /// The UV mapping coordinate along the y axis.
    pub const fn v(&self) -> Px {
        self.uv.y
    }

    /// The texture this sprite samples from.
    pub const fn texture(&self) -> &TextureLocation {
        &self.texture
    }

    /// The sprite's alignment.
    pub const fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// How many times the alignment resolver has run for this sprite,
    /// counting the one at construction. Diagnostic; stays constant
    /// while the frame size does.
    pub const fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons() -> TextureLocation {
        "game:gui/icons.png".parse().unwrap()
    }

    fn xp_bar(frame: PxSize) -> Sprite {
        Sprite::new(
            SpriteArgs::new(icons())
                .alignment(Alignment::BottomCenter)
                .offset(PxSize::from([0, 24]))
                .size(PxSize::from([182, 5]))
                .uv(PxPosition::from([0, 79])),
            frame,
        )
    }

    #[test]
    fn test_build_computes_initial_position() {
        let sprite = xp_bar(PxSize::from([800, 600]));
        assert_eq!(sprite.position(), PxPosition::from([309, 571]));
        assert_eq!(sprite.recompute_count(), 1);
    }

    #[test]
    fn test_accessors_project_without_side_effects() {
        let sprite = xp_bar(PxSize::from([800, 600]));
        assert_eq!(sprite.x(), Px(309));
        assert_eq!(sprite.y(), Px(571));
        assert_eq!(sprite.width(), Px(182));
        assert_eq!(sprite.height(), Px(5));
        assert_eq!(sprite.u(), Px(0));
        assert_eq!(sprite.v(), Px(79));
        assert_eq!(sprite.offset(), PxSize::from([0, 24]));
        assert_eq!(sprite.alignment(), Alignment::BottomCenter);
        assert_eq!(sprite.texture().to_string(), "game:gui/icons.png");
        assert_eq!(sprite.recompute_count(), 1);
    }

    #[test]
    fn test_refresh_is_memoized_on_stable_frame() {
        let frame = PxSize::from([800, 600]);
        let mut sprite = xp_bar(frame);

        let first = sprite.refresh(frame);
        let second = sprite.refresh(frame);
        let third = sprite.refresh(frame);
        assert_eq!(first, second);
        assert_eq!(second, third);

        // The resolver ran once, at construction.
        assert_eq!(sprite.recompute_count(), 1);
    }

    #[test]
    fn test_refresh_recomputes_on_resize() {
        let mut sprite = xp_bar(PxSize::from([800, 600]));

        let moved = sprite.refresh(PxSize::from([427, 240]));
        assert_eq!(moved, PxPosition::new(Px(427 / 2 - 91), Px(240 - 24 - 5)));
        assert_eq!(sprite.recompute_count(), 2);

        // Stable again: cache reads only.
        sprite.refresh(PxSize::from([427, 240]));
        assert_eq!(sprite.recompute_count(), 2);

        // The cache always matches a fresh resolution of the tracked frame.
        assert_eq!(
            sprite.position(),
            Alignment::BottomCenter.resolve(
                PxSize::from([427, 240]),
                sprite.size(),
                sprite.offset()
            )
        );
    }

    #[test]
    fn test_degenerate_size_still_builds() {
        let sprite = Sprite::new(
            SpriteArgs::new(icons()).size(PxSize::from([1, 1])),
            PxSize::from([427, 240]),
        );
        // Warned, not failed: the sprite is degenerate but usable.
        assert_eq!(sprite.width(), Px(1));
        assert_eq!(sprite.position(), PxPosition::ZERO);
    }

    #[test]
    fn test_default_args_place_top_left() {
        let sprite = Sprite::new(
            SpriteArgs::new(icons()).size(PxSize::from([16, 16])),
            PxSize::from([427, 240]),
        );
        assert_eq!(sprite.alignment(), Alignment::TopLeft);
        assert_eq!(sprite.position(), PxPosition::ZERO);
        assert_eq!(sprite.uv(), PxPosition::ZERO);
    }
}
