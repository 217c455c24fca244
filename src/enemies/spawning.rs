//! Enemy spawning.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Enemy, FrameAnimation};
use super::data::EnemyFrameSet;
use crate::combat::EnemyVitals;
use crate::core::EnemyTuning;
use crate::player::MoveSpeed;

/// Enemy sprite size relative to a tile.
const ENEMY_SCALE: f32 = 0.75;
const ENEMY_Z: f32 = 5.0;

/// Spawn one enemy, animated if a frame set is given.
pub fn spawn_enemy(
    commands: &mut Commands,
    position: Vec2,
    tile_size: f32,
    tuning: &EnemyTuning,
    frame_set: Option<&EnemyFrameSet>,
) -> Entity {
    let size = Vec2::splat(tile_size * ENEMY_SCALE);

    let mut enemy = commands.spawn((
        Enemy,
        EnemyVitals::new(tuning.health),
        MoveSpeed(tuning.speed),
        Transform::from_translation(position.extend(ENEMY_Z)),
        // Rapier physics components
        RigidBody::KinematicPositionBased,
        Collider::cuboid(size.x / 2.0, size.y / 2.0),
        KinematicCharacterController::default(),
    ));

    match frame_set.and_then(|set| set.frames.first().map(|first| (set, first))) {
        Some((set, first)) => {
            enemy.insert((
                Sprite {
                    image: first.clone(),
                    custom_size: Some(size),
                    ..default()
                },
                FrameAnimation::new(set.frames.clone(), tuning.frame_time),
            ));
        }
        None => {
            enemy.insert(Sprite::from_color(Color::srgb(0.75, 0.2, 0.2), size));
        }
    }

    enemy.id()
}
