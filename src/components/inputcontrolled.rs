//! Input-controlled movement components.
//!
//! - [`InputControlled`] – keyboard-driven horizontal movement; also serves as
//!   the player marker for collision queries
//! - [`MouseControlled`] – mouse position tracking
//!
//! Systems in [`crate::systems::playercontroller`] and
//! [`crate::systems::mousecontroller`] read these components to update entity
//! positions.

use bevy_ecs::prelude::Component;

/// Horizontal movement intent derived from player keyboard input.
///
/// `speed` is applied once per tick in the direction of the held key. When
/// both directions are held the two deltas cancel out.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Horizontal displacement per tick while a direction key is held.
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

/// Movement controlled by mouse position.
///
/// When attached to an entity, systems will update the entity's position
/// to follow the mouse cursor on the enabled axes.
#[derive(Component, Clone, Copy, Debug)]
pub struct MouseControlled {
    /// Follow mouse X axis.
    pub follow_x: bool,
    /// Follow mouse Y axis.
    pub follow_y: bool,
}

impl MouseControlled {
    pub fn new(follow_x: bool, follow_y: bool) -> Self {
        Self { follow_x, follow_y }
    }
}
