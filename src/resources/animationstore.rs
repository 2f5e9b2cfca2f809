//! Animation resource registry.
//!
//! Minimal store for spritesheet definitions that can be reused by multiple
//! entities. Systems look up a sheet by a string key and drive playback based
//! on the immutable parameters stored here; the per-entity state lives in the
//! [`Animation`](crate::components::animation::Animation) component.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Central registry of reusable spritesheet definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub sheets: FxHashMap<String, SheetAnimation>,
}

impl AnimationStore {
    pub fn insert(&mut self, key: impl Into<String>, sheet: SheetAnimation) {
        self.sheets.insert(key.into(), sheet);
    }

    pub fn get(&self, key: &str) -> Option<&SheetAnimation> {
        self.sheets.get(key)
    }
}

/// Immutable data describing a grid spritesheet.
///
/// Frames advance left-to-right within a row; rows select the movement
/// heading. The frame size in texture pixels is the texture size divided by
/// these counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetAnimation {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: String,
    /// Number of frame columns in the sheet.
    pub frame_count: usize,
    /// Number of animation rows in the sheet.
    pub row_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut store = AnimationStore::default();
        store.insert(
            "walker",
            SheetAnimation {
                tex_key: "walker".to_string(),
                frame_count: 6,
                row_count: 3,
            },
        );
        let sheet = store.get("walker").unwrap();
        assert_eq!(sheet.frame_count, 6);
        assert_eq!(sheet.row_count, 3);
        assert!(store.get("missing").is_none());
    }
}
