//! Sprite catalog: which textures make up the scene and how they behave.
//!
//! The catalog replaces a default-argument-heavy sprite constructor with an
//! explicit configuration: texture path, scale, sheet layout, and item effect
//! are all enumerated per entry. It is loaded from `assets/catalog.json` when
//! present, otherwise built-in defaults are used (with a logged warning), so
//! a missing file never aborts startup.

use std::fs;
use std::path::Path;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::components::itemeffect::ItemEffect;

/// A plain, single-frame sprite entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDef {
    pub texture: String,
    pub scale: f32,
}

/// A grid-spritesheet entry (the player character).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetDef {
    pub texture: String,
    pub scale: f32,
    pub frames: usize,
    pub rows: usize,
}

/// A falling-item entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub key: String,
    pub texture: String,
    pub scale: f32,
    pub effect: ItemEffect,
}

/// Everything the setup phase needs to build the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub background: SpriteDef,
    pub player: SheetDef,
    pub items: Vec<ItemDef>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            background: SpriteDef {
                texture: "assets/textures/background.png".to_string(),
                scale: 0.4,
            },
            player: SheetDef {
                texture: "assets/textures/character.png".to_string(),
                scale: 3.0,
                frames: 6,
                rows: 3,
            },
            items: vec![
                ItemDef {
                    key: "fruit".to_string(),
                    texture: "assets/textures/fruit.png".to_string(),
                    scale: 0.1,
                    effect: ItemEffect::Collect,
                },
                ItemDef {
                    key: "icecube".to_string(),
                    texture: "assets/textures/icecube.png".to_string(),
                    scale: 1.5,
                    effect: ItemEffect::Deny,
                },
            ],
        }
    }
}

impl Catalog {
    /// Parse a catalog from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .map_err(|e| format!("read {}: {}", path.display(), e))?;
        serde_json::from_str(&data).map_err(|e| format!("parse {}: {}", path.display(), e))
    }
}

/// One runtime item archetype: the catalog entry resolved against the loaded
/// texture's pixel size.
#[derive(Debug, Clone)]
pub struct ItemArchetype {
    pub tex_key: String,
    /// Source frame size in texture pixels.
    pub frame_width: f32,
    pub frame_height: f32,
    pub scale: f32,
    pub effect: ItemEffect,
}

impl ItemArchetype {
    /// World-space size of the item (frame size times scale), used for both
    /// drawing and the collider.
    pub fn world_size(&self) -> (f32, f32) {
        (self.frame_width * self.scale, self.frame_height * self.scale)
    }
}

/// Resource holding the resolved item archetypes, indexed by the spawner's
/// 50/50 pick.
#[derive(Resource, Debug, Clone, Default)]
pub struct ItemCatalog {
    pub archetypes: Vec<ItemArchetype>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_two_item_kinds() {
        let catalog = Catalog::default();
        assert_eq!(catalog.items.len(), 2);
        assert_eq!(catalog.items[0].effect, ItemEffect::Collect);
        assert_eq!(catalog.items[1].effect, ItemEffect::Deny);
    }

    #[test]
    fn test_catalog_json_round_trip() {
        let catalog = Catalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.items.len(), catalog.items.len());
        assert_eq!(parsed.player.frames, 6);
        assert_eq!(parsed.player.rows, 3);
    }

    #[test]
    fn test_load_from_missing_file_is_err() {
        assert!(Catalog::load_from_file("definitely/not/here.json").is_err());
    }

    #[test]
    fn test_archetype_world_size() {
        let arch = ItemArchetype {
            tex_key: "fruit".to_string(),
            frame_width: 320.0,
            frame_height: 240.0,
            scale: 0.1,
            effect: ItemEffect::Collect,
        };
        let (w, h) = arch.world_size();
        assert!((w - 32.0).abs() < 1e-4);
        assert!((h - 24.0).abs() < 1e-4);
    }
}
