//! Screen size resource.
//!
//! Stores the framebuffer dimensions in pixels. The render and mouse systems
//! use it to convert between the y-up world and y-down screen coordinates.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
