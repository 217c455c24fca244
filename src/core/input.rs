//! Per-frame input sampling.
//!
//! The core only reacts to three discrete actions. Movement keys are read
//! directly by the player systems and never pass through here.

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

/// Discrete actions sampled once at the start of the frame.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
    /// Leave the game
    pub quit: bool,
    /// Primary attack was triggered this frame
    pub attack: bool,
    /// Advance-dialogue key is held (debounced downstream)
    pub advance: bool,
}

/// Read keyboard, mouse and window events into `FrameInput`.
pub fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut close_requests: EventReader<WindowCloseRequested>,
    mut input: ResMut<FrameInput>,
) {
    *input = FrameInput {
        quit: keyboard.just_pressed(KeyCode::Escape) || close_requests.read().count() > 0,
        attack: mouse.just_pressed(MouseButton::Left),
        advance: keyboard.pressed(KeyCode::Space),
    };
}

/// Exit when the quit action was sampled.
pub fn handle_quit(input: Res<FrameInput>, mut exit: EventWriter<AppExit>) {
    if input.quit {
        info!("Quit requested");
        exit.send(AppExit::Success);
    }
}
