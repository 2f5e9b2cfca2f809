use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its frame size in texture pixels
/// and an offset into the texture if it is a spritesheet. The offset is used
/// to select the current frame.
///
/// Sprites are center-pivoted: [`MapPosition`](super::mapposition::MapPosition)
/// marks the sprite center, so the renderer and the collider agree on the
/// same point. Drawn size is frame size times the entity's
/// [`Scale`](super::scale::Scale).
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    /// Frame width in texture pixels.
    pub width: f32,
    /// Frame height in texture pixels.
    pub height: f32,
    /// Top-left corner of the current frame in texture pixels.
    pub offset: Vector2,
}

impl Sprite {
    /// Create a sprite showing the top-left frame of `tex_key`.
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}
