//! Catch resolution observer.
//!
//! Subscribes to [`CollisionEvent`] and applies the effect of the caught
//! item: beneficial items score a point, harmful ones cost a life. Either
//! way the item entity is re-outfitted with a freshly chosen archetype
//! (50/50 between the catalog kinds) and respawned through the spawner. The
//! effect tag itself is never mutated; the whole bundle is replaced.
//!
//! When lives run out a `GameOver` transition is requested; the state change
//! is applied by the game state observer, once, and is terminal.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::boxcollider::BoxCollider;
use crate::components::itemeffect::ItemEffect;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::events::collision::CollisionEvent;
use crate::resources::catalog::ItemCatalog;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::session::GameSession;
use crate::resources::spawner::ItemSpawner;

/// Score the catch, replace the item's archetype, and respawn it.
pub fn catch_observer(
    trigger: On<CollisionEvent>,
    mut session: ResMut<GameSession>,
    mut spawner: ResMut<ItemSpawner>,
    catalog: Res<ItemCatalog>,
    mut next_state: ResMut<NextGameState>,
    mut items: Query<(&ItemEffect, &mut MapPosition, &mut RigidBody)>,
    mut commands: Commands,
) {
    let item = trigger.event().item;
    let Ok((effect, mut position, mut body)) = items.get_mut(item) else {
        return;
    };

    match effect {
        ItemEffect::Collect => {
            session.collect();
            info!("Score: {}", session.score);
        }
        ItemEffect::Deny => {
            session.deny();
            info!("Lives: {}", session.displayed_lives());
        }
    }

    // Replace the item with a freshly chosen archetype before respawning.
    if !catalog.archetypes.is_empty() {
        let pick = spawner.pick_archetype(catalog.archetypes.len());
        let archetype = &catalog.archetypes[pick];
        let (w, h) = archetype.world_size();
        commands.entity(item).insert((
            Sprite::new(
                archetype.tex_key.clone(),
                archetype.frame_width,
                archetype.frame_height,
            ),
            Scale::uniform(archetype.scale),
            BoxCollider::new(w, h),
            archetype.effect,
        ));
    }

    let point = spawner.spawn();
    position.pos.x = point.x;
    position.pos.y = point.y;
    body.velocity.y = point.speed;

    if session.is_over() {
        next_state.set(GameStates::GameOver);
    }
}
