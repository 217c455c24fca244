//! Global events used for cross-system communication.

use bevy::prelude::*;

use crate::dialogue::CompletionAction;

/// Sent once when every enemy in the managed set has been defeated.
///
/// The scene hand-off system listens for this to relocate the player and
/// start the follow-up mission.
#[derive(Event, Debug, Clone, Copy)]
pub struct AllEnemiesDefeated;

/// Sent when a mission reaches the end of its lines and carried a
/// completion action.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionCompleted {
    pub action: CompletionAction,
}
