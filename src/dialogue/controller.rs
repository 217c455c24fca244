//! Dialogue/gameplay mode switching for the frame loop.

use std::time::Duration;

use bevy::prelude::*;

use super::mission::{CompletionAction, MissionSequencer};

/// Which half of the frame loop is in charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Player, enemies and combat update; HUD shown.
    #[default]
    Gameplay,
    /// World frozen; input goes to the active mission; HUD hidden.
    Dialogue,
}

/// The controller's state. A sequencer only exists while in dialogue.
#[derive(Debug, Default)]
pub enum GameMode {
    #[default]
    Gameplay,
    Dialogue(MissionSequencer),
}

/// Result of running the dialogue half of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueStep {
    /// No mission is running.
    Idle,
    /// The mission is still showing lines.
    Running,
    /// The mission just ended and control went back to gameplay.
    Finished(Option<CompletionAction>),
}

/// Owns the active mission and decides the mode of each frame.
#[derive(Resource, Debug, Default)]
pub struct GameModeController {
    mode: GameMode,
}

impl GameModeController {
    pub fn mode(&self) -> Mode {
        match self.mode {
            GameMode::Gameplay => Mode::Gameplay,
            GameMode::Dialogue(_) => Mode::Dialogue,
        }
    }

    /// Switch to dialogue with a fresh mission.
    ///
    /// A mission already running is dropped without completing.
    pub fn start_mission(&mut self, sequencer: MissionSequencer) {
        if let GameMode::Dialogue(previous) = &self.mode {
            warn!(
                "Replacing a running mission at line {}/{}",
                previous.current_index(),
                previous.line_count()
            );
        }
        self.mode = GameMode::Dialogue(sequencer);
    }

    pub fn active_sequencer(&self) -> Option<&MissionSequencer> {
        match &self.mode {
            GameMode::Dialogue(sequencer) => Some(sequencer),
            GameMode::Gameplay => None,
        }
    }

    /// Route the advance action to the mission and update it.
    ///
    /// When the mission goes inactive it is discarded and the controller
    /// returns to gameplay in the same call.
    pub fn update_dialogue(&mut self, advance: bool, now: Duration) -> DialogueStep {
        let GameMode::Dialogue(sequencer) = &mut self.mode else {
            return DialogueStep::Idle;
        };

        if advance {
            sequencer.handle_advance_input(now);
        }
        let action = sequencer.update(now);

        if sequencer.is_active() {
            return DialogueStep::Running;
        }

        self.mode = GameMode::Gameplay;
        DialogueStep::Finished(action)
    }
}

/// The mode latched at the start of the current frame.
///
/// Systems gate on this instead of the controller so a mode change made
/// mid-frame only takes effect on the next frame.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameMode(pub Mode);

/// Latch the controller's mode for this frame.
pub fn latch_frame_mode(controller: Res<GameModeController>, mut frame_mode: ResMut<FrameMode>) {
    let mode = controller.mode();
    if frame_mode.0 != mode {
        debug!("Frame mode {:?} -> {:?}", frame_mode.0, mode);
        frame_mode.0 = mode;
    }
}

/// Run condition: this frame belongs to the dialogue.
pub fn dialogue_frame(frame_mode: Res<FrameMode>) -> bool {
    frame_mode.0 == Mode::Dialogue
}

/// Run condition: this frame belongs to gameplay.
pub fn gameplay_frame(frame_mode: Res<FrameMode>) -> bool {
    frame_mode.0 == Mode::Gameplay
}
