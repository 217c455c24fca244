//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::data::{load_enemy_frames, EnemyFrames};
use crate::core::FrameSet;
use crate::dialogue::gameplay_frame;

/// Enemy plugin - handles enemy animation sets, chasing and animation.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<EnemyFrames>()
            .add_systems(Startup, load_enemy_frames)
            // World is frozen during dialogue
            .add_systems(
                Update,
                (ai::enemy_chase, ai::animate_enemies)
                    .chain()
                    .run_if(gameplay_frame)
                    .in_set(FrameSet::Simulate),
            );
    }
}
