//! Game state and per-frame ordering.
//!
//! `GameState` gates everything on startup loading. Once in game, each
//! frame runs the `FrameSet`s in order: input is sampled once, exactly one
//! of the dialogue or gameplay simulations runs, then presentation.

use bevy::prelude::*;

/// Top-level game flow.
///
/// - Start in `Loading` while the dialogue font and level data load
/// - Enter `InGame` once everything the frame loop needs is available
///
/// A failed load never reaches `InGame`; the app exits instead.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Waiting on startup assets
    #[default]
    Loading,
    /// Frame loop is running
    InGame,
}

/// Ordered phases of one in-game frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Sample input and latch the frame's mode
    Input,
    /// Dialogue update or world simulation, never both
    Simulate,
    /// Dialogue box, HUD visibility, camera
    Present,
}
