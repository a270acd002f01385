//! Overlay demo: six sprites aligned to every frame region, drawn
//! against a console host that prints blit commands instead of pixels.

use hudlet::{
    Alignment, BlitCommand, HostSurface, PxPosition, PxSize, Sprite, SpriteArgs, TextureLocation,
    draw_sprite,
};
use tracing::info;

/// A host surface that logs what a real renderer would blit.
struct ConsoleHost {
    frame: PxSize,
}

impl HostSurface for ConsoleHost {
    fn frame_size(&self) -> PxSize {
        self.frame
    }

    fn blit(&mut self, command: BlitCommand<'_>) {
        info!(
            texture = %command.texture,
            x = command.position.x.raw(),
            y = command.position.y.raw(),
            u = command.uv.x.raw(),
            v = command.uv.y.raw(),
            width = command.size.width.raw(),
            height = command.size.height.raw(),
            "blit"
        );
    }
}

fn overlay_sprites(frame: PxSize) -> Vec<Sprite> {
    let icons: TextureLocation = "game:gui/icons.png".parse().expect("valid location");
    let mapped = TextureLocation::texture("example", "gui/mapped_test.png")
        .expect("valid location");

    vec![
        // Draws over the spot a game's xp bar usually occupies.
        Sprite::new(
            SpriteArgs::new(icons)
                .alignment(Alignment::BottomCenter)
                .offset(PxSize::from([0, 24]))
                .size(PxSize::from([182, 5]))
                .uv(PxPosition::from([0, 79])),
            frame,
        ),
        Sprite::new(
            SpriteArgs::new(mapped.clone())
                .alignment(Alignment::TopLeft)
                .offset(PxSize::from([15, 15]))
                .size(PxSize::from([123, 48])),
            frame,
        ),
        Sprite::new(
            SpriteArgs::new(mapped.clone())
                .alignment(Alignment::TopRight)
                .uv(PxPosition::from([0, 48]))
                .size(PxSize::from([123, 48])),
            frame,
        ),
        Sprite::new(
            SpriteArgs::new(mapped.clone())
                .alignment(Alignment::BottomLeft)
                .offset(PxSize::from([5, 5]))
                .uv(PxPosition::from([37, 96]))
                .size(PxSize::from([37, 46])),
            frame,
        ),
        Sprite::new(
            SpriteArgs::new(mapped.clone())
                .alignment(Alignment::BottomRight)
                .offset(PxSize::from([5, 5]))
                .uv(PxPosition::from([0, 96]))
                .size(PxSize::from([37, 46])),
            frame,
        ),
        Sprite::new(
            SpriteArgs::new(mapped)
                .alignment(Alignment::Center)
                .uv(PxPosition::from([181, 37]))
                .size(PxSize::from([19, 20])),
            frame,
        ),
    ]
}

fn main() {
    hudlet::init_tracing();

    let mut host = ConsoleHost {
        frame: PxSize::from([427, 240]),
    };
    let mut sprites = overlay_sprites(host.frame_size());

    info!(frame = ?host.frame_size(), "drawing overlay");
    for sprite in &mut sprites {
        draw_sprite(&mut host, sprite);
    }

    // Simulate a window resize; every sprite repositions once.
    host.frame = PxSize::from([854, 480]);
    info!(frame = ?host.frame_size(), "frame resized, drawing again");
    for sprite in &mut sprites {
        draw_sprite(&mut host, sprite);
    }
}
