//! hudlet is a small layout engine for fixed-size HUD sprites in a
//! resizable display frame.
//!
//! A [`Sprite`] carries a size, an [`Alignment`], an edge offset and a
//! texture UV origin. The engine computes the sprite's top-left drawing
//! coordinate from the current frame size, caches it, and re-derives it
//! lazily only when the frame size actually changes. Rendering itself is
//! the host's job, reached through the [`HostSurface`] trait.
//!
//! # Example
//!
//! ```
//! use hudlet::{Alignment, Px, PxSize, Sprite, SpriteArgs};
//!
//! let mut xp_bar = Sprite::new(
//!     SpriteArgs::new("game:gui/icons.png".parse().unwrap())
//!         .alignment(Alignment::BottomCenter)
//!         .offset(PxSize::from([0, 24]))
//!         .size(PxSize::from([182, 5])),
//!     PxSize::from([800, 600]),
//! );
//!
//! // Each frame tick: refresh against the current frame size.
//! let position = xp_bar.refresh(PxSize::from([800, 600]));
//! assert_eq!(position.x, Px::new(309));
//! assert_eq!(position.y, Px::new(571));
//! ```
//!
//! # Concurrency
//!
//! The engine is synchronous and lock-free. Drive it from a single
//! render loop, one `refresh` per frame tick; a sprite's `&mut self`
//! API confines it to one thread at a time.

pub mod alignment;
pub mod frame;
pub mod host;
pub mod px;
pub mod sprite;
pub mod texture;

pub use alignment::Alignment;
pub use frame::{DEFAULT_FRAME_SIZE, FrameTracker};
pub use host::{BlitCommand, HostSurface, draw_sprite};
pub use px::{FrozenPxSize, Px, PxPosition, PxSize};
pub use sprite::{Sprite, SpriteArgs};
pub use texture::{TextureLocation, TextureLocationError};

/// Initializes the global tracing subscriber for hosts that do not
/// bring their own.
///
/// Respects `RUST_LOG` when set, otherwise logs errors globally and
/// info-level events from this crate. Calling it more than once is a
/// no-op; an embedding host that already installed a subscriber keeps
/// its own.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new("error,hudlet=info"),
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
