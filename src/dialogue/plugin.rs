//! Dialogue plugin - missions, typewriter text and mode switching.

use bevy::prelude::*;

use super::controller::*;
use super::data::{load_missions, MissionRegistry};
use super::mission::MissionTiming;
use super::ui::{load_dialogue_font, render_dialogue_box, spawn_dialogue_box};
use crate::core::{FrameInput, FrameSet, GameConfig, GameState, MissionCompleted};

/// Dialogue plugin - owns the mode controller and the dialogue box.
pub struct DialoguePlugin;

impl Plugin for DialoguePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<GameModeController>()
            .init_resource::<FrameMode>()

            .add_systems(Startup, (load_dialogue_font, load_missions))
            .add_systems(
                OnEnter(GameState::InGame),
                (spawn_dialogue_box, start_intro_mission),
            )

            .add_systems(Update, latch_frame_mode.in_set(FrameSet::Input))
            .add_systems(
                Update,
                run_dialogue.run_if(dialogue_frame).in_set(FrameSet::Simulate),
            )
            .add_systems(Update, render_dialogue_box.in_set(FrameSet::Present));
    }
}

/// Open the game with the intro conversation.
fn start_intro_mission(
    config: Res<GameConfig>,
    registry: Res<MissionRegistry>,
    mut controller: ResMut<GameModeController>,
) {
    let id = &config.combat.intro_mission;
    info!("Starting mission '{}'", id);
    controller.start_mission(registry.sequencer(id, MissionTiming::from(&config.dialogue)));
}

/// Dialogue half of the frame: advance input, typewriter, completion.
pub(crate) fn run_dialogue(
    time: Res<Time>,
    input: Res<FrameInput>,
    mut controller: ResMut<GameModeController>,
    mut completed: EventWriter<MissionCompleted>,
) {
    match controller.update_dialogue(input.advance, time.elapsed()) {
        DialogueStep::Finished(Some(action)) => {
            info!("Mission finished, running {:?}", action);
            completed.send(MissionCompleted { action });
        }
        DialogueStep::Finished(None) => {
            info!("Mission finished");
        }
        DialogueStep::Running | DialogueStep::Idle => {}
    }
}
