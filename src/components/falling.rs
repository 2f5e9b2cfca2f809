use bevy_ecs::prelude::Component;

/// Marker for entities driven by the falling system: they move down by their
/// [`RigidBody`](super::rigidbody::RigidBody) velocity each tick and are
/// recycled through the spawner when they reach the floor.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Falling;
