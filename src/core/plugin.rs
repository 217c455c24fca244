//! Core plugin that sets up game flow, frame ordering, events and config.

use bevy::asset::LoadState;
use bevy::prelude::*;

use super::config::{GameConfig, GAME_CONFIG_PATH};
use super::events::*;
use super::input::{handle_quit, sample_input, FrameInput};
use super::states::*;
use crate::dialogue::DialogueFont;
use crate::world::CurrentLevel;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame)
/// - The `FrameSet` ordering every in-game system runs inside
/// - Global events (AllEnemiesDefeated, MissionCompleted)
/// - The tuning config resource
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(GameConfig::load(GAME_CONFIG_PATH))
            .init_resource::<FrameInput>()

            .init_state::<GameState>()

            .add_event::<AllEnemiesDefeated>()
            .add_event::<MissionCompleted>()

            .configure_sets(
                Update,
                (FrameSet::Input, FrameSet::Simulate, FrameSet::Present)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )

            .add_systems(Startup, spawn_camera)
            .add_systems(Update, finish_loading.run_if(in_state(GameState::Loading)))
            .add_systems(
                Update,
                (sample_input, handle_quit).chain().in_set(FrameSet::Input),
            );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Enter `InGame` once the font and level are ready; exit on a failed load.
///
/// A missing font is a startup failure, not something to retry.
fn finish_loading(
    asset_server: Res<AssetServer>,
    font: Option<Res<DialogueFont>>,
    level: Option<Res<CurrentLevel>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(font) = font else {
        return;
    };

    match asset_server.get_load_state(font.0.id()) {
        Some(LoadState::Loaded) => {}
        Some(LoadState::Failed(err)) => {
            error!("Dialogue font failed to load: {}", err);
            exit.send(AppExit::error());
            return;
        }
        _ => return,
    }

    if level.is_none() {
        return;
    }

    info!("Startup assets ready, entering game");
    next_state.set(GameState::InGame);
}
