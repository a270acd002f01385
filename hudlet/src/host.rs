//! The boundary to the host rendering and windowing system.
//!
//! hudlet never touches pixels or windows itself. The host implements
//! [`HostSurface`]: a cheap synchronous frame-size query, and a blit
//! sink that receives one [`BlitCommand`] per sprite per draw call.

use crate::px::{PxPosition, PxSize};
use crate::sprite::Sprite;
use crate::texture::TextureLocation;

/// One rectangle of texture to draw, in frame coordinates.
///
/// Everything the host's blit routine needs: where to draw, where in
/// the texture to sample from, how much to cover, and which texture to
/// bind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlitCommand<'a> {
    /// Top-left drawing coordinate in the frame.
    pub position: PxPosition,
    /// UV sampling origin within the texture.
    pub uv: PxPosition,
    /// Extent to draw, equal to the sprite size.
    pub size: PxSize,
    /// Texture to bind before blitting.
    pub texture: &'a TextureLocation,
}

/// Host-provided display surface.
///
/// The frame-size query is treated as a cheap, synchronous,
/// always-succeeding call; hudlet invokes it once per sprite draw.
pub trait HostSurface {
    /// Current size of the display frame.
    fn frame_size(&self) -> PxSize;

    /// Renders one texture rectangle. hudlet performs no pixel I/O of
    /// its own.
    fn blit(&mut self, command: BlitCommand<'_>);
}

/// Refreshes `sprite` against the host's current frame size and hands
/// the host a blit command for it.
///
/// # Examples
///
/// ```
/// use hudlet::{
///     Alignment, BlitCommand, HostSurface, PxPosition, PxSize, Sprite, SpriteArgs, draw_sprite,
/// };
///
/// struct Recorder {
///     frame: PxSize,
///     blits: Vec<PxPosition>,
/// }
///
/// impl HostSurface for Recorder {
///     fn frame_size(&self) -> PxSize {
///         self.frame
///     }
///     fn blit(&mut self, command: BlitCommand<'_>) {
///         self.blits.push(command.position);
///     }
/// }
///
/// let mut host = Recorder { frame: PxSize::from([800, 600]), blits: Vec::new() };
/// let mut crosshairs = Sprite::new(
///     SpriteArgs::new("game:gui/icons.png".parse().unwrap())
///         .alignment(Alignment::Center)
///         .size(PxSize::from([20, 20])),
///     host.frame_size(),
/// );
///
/// draw_sprite(&mut host, &mut crosshairs);
/// assert_eq!(host.blits, vec![PxPosition::from([390, 290])]);
/// ```
pub fn draw_sprite(host: &mut impl HostSurface, sprite: &mut Sprite) {
    let frame = host.frame_size();
    sprite.refresh(frame);
    host.blit(BlitCommand {
        position: sprite.position(),
        uv: sprite.uv(),
        size: sprite.size(),
        texture: sprite.texture(),
    });
}
