//! Enemy behavior systems.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::{Enemy, FrameAnimation};
use crate::combat::EnemyVitals;
use crate::core::GameConfig;
use crate::player::{Blocked, MoveSpeed, Player};

/// Walk toward the player until within stopping distance.
pub fn enemy_chase(
    time: Res<Time>,
    config: Res<GameConfig>,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (&Transform, &MoveSpeed, &EnemyVitals, &mut KinematicCharacterController),
        (With<Enemy>, Without<Player>, Without<Blocked>),
    >,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let target = player_transform.translation.truncate();

    for (transform, speed, vitals, mut controller) in enemy_query.iter_mut() {
        if vitals.defeated {
            continue;
        }

        let offset = target - transform.translation.truncate();
        if offset.length() <= config.enemies.stop_distance {
            continue;
        }

        let step = offset.normalize_or_zero() * speed.0 * time.delta_secs();
        controller.translation = Some(step);
    }
}

/// Cycle animation frames of living enemies.
pub fn animate_enemies(
    time: Res<Time>,
    mut query: Query<(&mut FrameAnimation, &mut Sprite, &EnemyVitals), With<Enemy>>,
) {
    for (mut animation, mut sprite, vitals) in query.iter_mut() {
        if vitals.defeated {
            continue;
        }

        animation.timer.tick(time.delta());
        if !animation.timer.just_finished() {
            continue;
        }
        if let Some(frame) = animation.advance() {
            sprite.image = frame.clone();
        }
    }
}
