use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Effect of catching a falling item. Entities without this component
/// (background, player) have no effect.
///
/// The tag is never mutated in place: after a catch, the item entity gets a
/// whole new archetype bundle (sprite, collider, effect) from the
/// [`ItemCatalog`](crate::resources::catalog::ItemCatalog).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Beneficial: catching it increments the score.
    Collect,
    /// Harmful: catching it costs a life.
    Deny,
}
