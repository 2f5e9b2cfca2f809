//! Collision event type.
//!
//! The collision system emits [`CollisionEvent`] whenever the player's
//! bounds overlap a falling item's bounds. The catch observer in
//! [`crate::systems::catch`] subscribes to it to score the catch and recycle
//! the item, keeping detection and resolution decoupled.

use bevy_ecs::prelude::*;

/// Event fired when the player overlaps a falling item this tick.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    /// The catching player entity.
    pub player: Entity,
    /// The caught item entity.
    pub item: Entity,
}
