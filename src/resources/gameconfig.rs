//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and a loader that tolerates a missing file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 120
//!
//! [game]
//! lives = 3
//! item_count = 4
//! item_speed = 2.0
//! player_speed = 4.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_LIVES: i32 = 3;
const DEFAULT_ITEM_COUNT: usize = 4;
const DEFAULT_ITEM_SPEED: f32 = 2.0;
const DEFAULT_PLAYER_SPEED: f32 = 4.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings and gameplay tunables. A missing or partial file
/// leaves the corresponding defaults in place.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels. Also the play-area width.
    pub window_width: u32,
    /// Window height in pixels. Also the play-area height.
    pub window_height: u32,
    /// Target tick rate; movement is per-tick so this caps game speed.
    pub target_fps: u32,
    /// Starting lives.
    pub lives: i32,
    /// Number of concurrently falling items.
    pub item_count: usize,
    /// Base item fall speed in world units per tick.
    pub item_speed: f32,
    /// Player horizontal speed in world units per tick.
    pub player_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            lives: DEFAULT_LIVES,
            item_count: DEFAULT_ITEM_COUNT,
            item_speed: DEFAULT_ITEM_SPEED,
            player_speed: DEFAULT_PLAYER_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Override the configuration file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = path;
        self
    }

    /// Load values from the configuration file, keeping defaults for any
    /// missing key.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(self.config_path.to_string_lossy().as_ref())?;

        if let Ok(Some(v)) = ini.getuint("window", "width") {
            self.window_width = v as u32;
        }
        if let Ok(Some(v)) = ini.getuint("window", "height") {
            self.window_height = v as u32;
        }
        if let Ok(Some(v)) = ini.getuint("window", "target_fps") {
            self.target_fps = v as u32;
        }
        if let Ok(Some(v)) = ini.getint("game", "lives") {
            self.lives = v as i32;
        }
        if let Ok(Some(v)) = ini.getuint("game", "item_count") {
            self.item_count = v as usize;
        }
        if let Ok(Some(v)) = ini.getfloat("game", "item_speed") {
            self.item_speed = v as f32;
        }
        if let Ok(Some(v)) = ini.getfloat("game", "player_speed") {
            self.player_speed = v as f32;
        }

        info!("loaded configuration from {}", self.config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = GameConfig::new();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.lives, 3);
        assert_eq!(config.item_count, 4);
        assert!(config.item_speed > 0.0);
        assert!(config.player_speed > 0.0);
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let mut config =
            GameConfig::new().with_config_path(PathBuf::from("/nonexistent/config.ini"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.lives, DEFAULT_LIVES);
    }
}
