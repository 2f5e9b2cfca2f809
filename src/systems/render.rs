//! Raylib rendering.
//!
//! Exclusive system drawing the whole scene: sprites sorted by
//! [`ZIndex`](crate::components::zindex::ZIndex) (painter's algorithm), then
//! the score/lives HUD. Sprites whose texture key is missing from the store
//! are skipped, so a failed texture load degrades visuals without aborting.
//!
//! The world is y-up while raylib screens are y-down; positions are flipped
//! against the screen height here and nowhere else.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::screensize::ScreenSize;
use crate::resources::session::GameSession;
use crate::resources::texturestore::TextureStore;

/// Sky-blue clear color of the play area.
const CLEAR_COLOR: Color = Color::new(193, 229, 245, 255);

/// Draw one frame: clear, sprites back-to-front, HUD.
pub fn render_system(world: &mut World) {
    let screen = *world.resource::<ScreenSize>();

    // Collect and z-sort before touching the draw handle.
    let mut to_draw: Vec<(Sprite, MapPosition, Scale, f32, ZIndex)> = {
        let mut q = world.query::<(
            &Sprite,
            &MapPosition,
            Option<&Scale>,
            Option<&Rotation>,
            &ZIndex,
        )>();
        q.iter(world)
            .map(|(sprite, pos, scale, rotation, z)| {
                (
                    sprite.clone(),
                    *pos,
                    scale.copied().unwrap_or_default(),
                    rotation.map(|r| r.degrees).unwrap_or(0.0),
                    *z,
                )
            })
            .collect()
    };
    to_draw.sort_by_key(|&(_, _, _, _, z)| z);

    let th = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing from world");
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle missing from world");
    {
        let mut d = rl.begin_drawing(&th);
        d.clear_background(CLEAR_COLOR);

        let textures = world.resource::<TextureStore>();
        for (sprite, pos, scale, degrees, _z) in to_draw.iter() {
            let Some(tex) = textures.get(&sprite.tex_key) else {
                continue;
            };

            // Source rect selects a frame from the spritesheet.
            let src = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: sprite.width,
                height: sprite.height,
            };

            // Destination places the sprite center at MapPosition, flipped
            // into screen space.
            let dest = Rectangle {
                x: pos.pos.x,
                y: screen.h as f32 - pos.pos.y,
                width: sprite.width * scale.scale.x,
                height: sprite.height * scale.scale.y,
            };
            let origin = Vector2 {
                x: dest.width / 2.0,
                y: dest.height / 2.0,
            };

            // Rotation sense flips along with the y axis.
            d.draw_texture_pro(tex, src, dest, origin, -degrees, Color::WHITE);
        }

        if let Some(session) = world.get_resource::<GameSession>() {
            let score = format!("Score: {}", session.score);
            let lives = format!("Lives: {}", session.displayed_lives());
            d.draw_text(&score, 10, 10, 20, Color::BLACK);
            d.draw_text(&lives, 10, 35, 20, Color::BLACK);
        }
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(th);
}
