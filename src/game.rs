//! Scene setup for the catch game.
//!
//! Loads the sprite catalog and textures, registers the player spritesheet,
//! and spawns the background, the player, and the initial wave of falling
//! items. Asset failures are recoverable: a missing catalog falls back to the
//! built-in one and a missing texture leaves the sprite invisible with a
//! placeholder collider size, both logged.

use bevy_ecs::prelude::*;
use log::warn;
use raylib::{RaylibHandle, RaylibThread};

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::falling::Falling;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::animationstore::{AnimationStore, SheetAnimation};
use crate::resources::catalog::{Catalog, ItemArchetype, ItemCatalog};
use crate::resources::gameconfig::GameConfig;
use crate::resources::session::GameSession;
use crate::resources::spawner::ItemSpawner;
use crate::resources::texturestore::TextureStore;

const CATALOG_PATH: &str = "assets/catalog.json";

/// Fallback pixel size when a texture cannot be decoded, so colliders and
/// layout still have nonzero extents.
const PLACEHOLDER_TEXTURE_SIZE: (f32, f32) = (64.0, 64.0);

/// Player spawn point (horizontal center, near the floor).
const PLAYER_SPAWN: (f32, f32) = (400.0, 100.0);

/// Build the whole scene into `world`.
///
/// Expects the raylib handle/thread, [`GameConfig`] and [`ItemSpawner`]
/// resources to already be present.
pub fn setup(world: &mut World) {
    let config = world.resource::<GameConfig>().clone();

    let catalog = match Catalog::load_from_file(CATALOG_PATH) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!("using built-in catalog: {}", e);
            Catalog::default()
        }
    };

    let th = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing from world");
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle missing from world");

    let mut textures = TextureStore::new();
    let bg_size = textures
        .load(&mut rl, &th, "background", &catalog.background.texture)
        .unwrap_or(PLACEHOLDER_TEXTURE_SIZE);
    let player_size = textures
        .load(&mut rl, &th, "player", &catalog.player.texture)
        .unwrap_or(PLACEHOLDER_TEXTURE_SIZE);

    let mut archetypes = Vec::with_capacity(catalog.items.len());
    for item in &catalog.items {
        let (tex_w, tex_h) = textures
            .load(&mut rl, &th, item.key.clone(), &item.texture)
            .unwrap_or(PLACEHOLDER_TEXTURE_SIZE);
        archetypes.push(ItemArchetype {
            tex_key: item.key.clone(),
            frame_width: tex_w,
            frame_height: tex_h,
            scale: item.scale,
            effect: item.effect,
        });
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(th);

    // Background, centered on the play area.
    world.spawn((
        Sprite::new("background", bg_size.0, bg_size.1),
        Scale::uniform(catalog.background.scale),
        MapPosition::new(
            config.window_width as f32 / 2.0,
            config.window_height as f32 / 2.0,
        ),
        ZIndex(0),
    ));

    // Player: a spritesheet character moved by the keyboard.
    let frame_w = player_size.0 / catalog.player.frames as f32;
    let frame_h = player_size.1 / catalog.player.rows as f32;
    let mut animations = AnimationStore::default();
    animations.insert(
        "player",
        SheetAnimation {
            tex_key: "player".to_string(),
            frame_count: catalog.player.frames,
            row_count: catalog.player.rows,
        },
    );
    world.spawn((
        Sprite::new("player", frame_w, frame_h),
        Scale::uniform(catalog.player.scale),
        MapPosition::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
        Animation::new("player"),
        InputControlled::new(config.player_speed),
        BoxCollider::new(
            frame_w * catalog.player.scale,
            frame_h * catalog.player.scale,
        ),
        ZIndex(20),
    ));

    // Initial wave of falling items, each a random archetype at a random
    // spawn point.
    let item_catalog = ItemCatalog { archetypes };
    let mut spawner = world
        .remove_resource::<ItemSpawner>()
        .expect("ItemSpawner missing from world");
    if !item_catalog.archetypes.is_empty() {
        for _ in 0..config.item_count {
            let pick = spawner.pick_archetype(item_catalog.archetypes.len());
            let archetype = &item_catalog.archetypes[pick];
            let (w, h) = archetype.world_size();
            let point = spawner.spawn();
            world.spawn((
                Sprite::new(
                    archetype.tex_key.clone(),
                    archetype.frame_width,
                    archetype.frame_height,
                ),
                Scale::uniform(archetype.scale),
                MapPosition::new(point.x, point.y),
                RigidBody::with_velocity(0.0, point.speed),
                BoxCollider::new(w, h),
                archetype.effect,
                Falling,
                ZIndex(10),
            ));
        }
    }
    world.insert_resource(spawner);

    world.insert_resource(textures);
    world.insert_resource(animations);
    world.insert_resource(item_catalog);
    world.insert_resource(GameSession::new(config.lives));
}
