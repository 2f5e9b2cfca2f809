//! Falling-item system.
//!
//! Items above the floor move down by their velocity once per tick. At or
//! below the floor the item was missed: no penalty, it is simply recycled
//! through the spawner (same archetype, fresh position and speed).

use bevy_ecs::prelude::*;

use crate::components::falling::Falling;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::spawner::ItemSpawner;

/// Vertical threshold below which a falling item counts as missed.
pub const FLOOR_Y: f32 = 50.0;

/// Advance every falling item by one tick.
pub fn falling(
    mut query: Query<(&mut MapPosition, &mut RigidBody), With<Falling>>,
    mut spawner: ResMut<ItemSpawner>,
) {
    for (mut position, mut body) in query.iter_mut() {
        if position.pos.y > FLOOR_Y {
            position.pos.y -= body.velocity.y;
        } else {
            let point = spawner.spawn();
            position.pos.x = point.x;
            position.pos.y = point.y;
            body.velocity.y = point.speed;
        }
    }
}
