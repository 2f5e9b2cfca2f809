//! Loaded textures keyed by string IDs.
//!
//! Texture decode failures are recoverable by design: the key stays absent,
//! a warning is logged, and the renderer skips sprites whose key cannot be
//! resolved (degraded visuals instead of an abort).

use bevy_ecs::prelude::Resource;
use log::warn;
use raylib::prelude::Texture2D;
use raylib::{RaylibHandle, RaylibThread};
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `path` and register it under `key`.
    ///
    /// Returns the texture's pixel size, or `None` when decoding failed; the
    /// failure is logged and the store is left without the key.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        key: impl Into<String>,
        path: &str,
    ) -> Option<(f32, f32)> {
        let key = key.into();
        match rl.load_texture(th, path) {
            Ok(tex) => {
                let size = (tex.width as f32, tex.height as f32);
                self.map.insert(key, tex);
                Some(size)
            }
            Err(e) => {
                warn!("failed to load texture '{}' from {}: {}", key, path, e);
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
