//! World plugin - level loading and world setup.

use bevy::prelude::*;

use crate::core::{GameConfig, GameState};
use crate::enemies::{spawn_enemy, EnemyFrames};
use crate::player::spawn_player;

use super::builder::build_level_tiles;
use super::data::{CurrentLevel, LevelDefinition};

/// World plugin - handles level loading and world setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_level)
            .add_systems(OnEnter(GameState::InGame), setup_level);
    }
}

/// Load the level file. A broken level is fatal.
fn load_level(mut commands: Commands, config: Res<GameConfig>, mut exit: EventWriter<AppExit>) {
    match LevelDefinition::load(&config.world.level_path) {
        Ok(level) => {
            info!(
                "Loaded level '{}' with {} enemies",
                level.name,
                level.enemy_spawns.len()
            );
            commands.insert_resource(CurrentLevel(level));
        }
        Err(e) => {
            error!("Failed to load level: {}", e);
            exit.send(AppExit::error());
        }
    }
}

/// Set up the level from data.
pub fn setup_level(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    level: Res<CurrentLevel>,
    config: Res<GameConfig>,
    enemy_frames: Res<EnemyFrames>,
) {
    let level = &level.0;
    info!("Building level: {}", level.name);

    build_level_tiles(&mut commands, &asset_server, level);

    spawn_player(
        &mut commands,
        &asset_server,
        level.player_world_start(),
        level.tile_size,
        &config.player,
    );

    let mut rng = rand::thread_rng();
    for &(x, y) in &level.enemy_spawns {
        spawn_enemy(
            &mut commands,
            level.grid_to_world(x, y),
            level.tile_size,
            &config.enemies,
            enemy_frames.pick(&mut rng),
        );
    }
}
