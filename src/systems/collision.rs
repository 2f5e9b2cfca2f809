//! Player/item collision detection.
//!
//! Runs once per tick: the player's bounds are computed from its current
//! position, then each falling item's bounds, then the closed-interval
//! overlap test. Overlapping pairs trigger a
//! [`CollisionEvent`](crate::events::collision::CollisionEvent) which the
//! catch observer resolves. Bounds are never cached across ticks.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::InputControlled;
use crate::components::itemeffect::ItemEffect;
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionEvent;

/// Test the player against every falling item and emit collision events.
pub fn collision_detector(
    players: Query<(Entity, &MapPosition, &BoxCollider), With<InputControlled>>,
    items: Query<(Entity, &MapPosition, &BoxCollider), With<ItemEffect>>,
    mut commands: Commands,
) {
    for (player, player_pos, player_collider) in players.iter() {
        for (item, item_pos, item_collider) in items.iter() {
            if player_collider.overlaps(player_pos.pos, item_collider, item_pos.pos) {
                commands.trigger(CollisionEvent { player, item });
            }
        }
    }
}
