//! Tuning configuration loaded from an external RON file.
//!
//! Allows tweaking dialogue pacing, combat numbers and movement without
//! recompilation. Every field has a default, so partial files are fine.

use std::fs;
use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

/// Default location of the tuning file.
pub const GAME_CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Dialogue pacing and dialogue box layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    /// Milliseconds between two revealed characters
    pub reveal_interval_ms: u64,
    /// Minimum milliseconds between two accepted advance inputs
    pub input_cooldown_ms: u64,
    /// Font used for the dialogue text, relative to `assets/`
    pub font: String,
    pub font_size: f32,
    /// Box width as a fraction of the window width
    pub box_width_fraction: f32,
    /// Box height as a fraction of the window height
    pub box_height_fraction: f32,
    /// Gap between the box and the bottom edge, in pixels
    pub bottom_margin: f32,
    pub border_width: f32,
    pub text_padding: f32,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: 50,
            input_cooldown_ms: 200,
            font: "fonts/dialogue.ttf".to_string(),
            font_size: 36.0,
            box_width_fraction: 0.9,
            box_height_fraction: 0.2,
            bottom_margin: 20.0,
            border_width: 3.0,
            text_padding: 20.0,
        }
    }
}

impl DialogueConfig {
    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    pub fn input_cooldown(&self) -> Duration {
        Duration::from_millis(self.input_cooldown_ms)
    }
}

/// Attack numbers and the missions that bracket the fight.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    pub damage: i32,
    /// Attack reach in map pixels (strict: distance must be below it)
    pub range: f32,
    /// Where the player is moved after the last enemy falls, in map pixels
    pub handoff_position: (f32, f32),
    /// Mission played when the game starts
    pub intro_mission: String,
    /// Mission played after the hand-off
    pub victory_mission: String,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            damage: 10,
            range: 100.0,
            handoff_position: (1200.0, 1200.0),
            intro_mission: "intro".to_string(),
            victory_mission: "awakening".to_string(),
        }
    }
}

/// Player movement tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Pixels per second
    pub speed: f32,
    /// Sprite image relative to `assets/`; a plain quad is drawn without one
    pub sprite: Option<String>,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 500.0,
            sprite: None,
        }
    }
}

/// Enemy tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub health: i32,
    /// Pixels per second
    pub speed: f32,
    /// Seconds per animation frame
    pub frame_time: f32,
    /// Enemies stop closing in at this distance, in pixels
    pub stop_distance: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            health: 10,
            speed: 250.0,
            frame_time: 0.15,
            stop_distance: 40.0,
        }
    }
}

/// World data locations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub level_path: String,
    pub missions_path: String,
    /// Directory scanned for enemy animation sets, relative to `assets/`
    pub enemy_images_dir: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            level_path: "assets/data/levels/world.ron".to_string(),
            missions_path: "assets/data/missions.ron".to_string(),
            enemy_images_dir: "images/enemies".to_string(),
        }
    }
}

/// All tuning values, grouped by domain.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub dialogue: DialogueConfig,
    pub combat: CombatConfig,
    pub player: PlayerTuning,
    pub enemies: EnemyTuning,
    pub world: WorldConfig,
}

impl GameConfig {
    /// Load the config from a RON file, falling back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded game config from {:?}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }
}
