//! Top-down player movement and camera follow.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use crate::core::{FrameSet, PlayerTuning};
use crate::dialogue::gameplay_frame;

/// Player sprite size relative to a tile.
const PLAYER_SCALE: f32 = 0.75;
const PLAYER_Z: f32 = 10.0;

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(
        Update,
        player_movement
            .run_if(gameplay_frame)
            .in_set(FrameSet::Simulate),
    )
    .add_systems(Update, camera_follow.in_set(FrameSet::Present));
}

/// Unit direction from WASD / arrow keys, or zero.
fn input_direction(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut direction = Vec2::ZERO;
    if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        direction.y += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        direction.y -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        direction.x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        direction.x += 1.0;
    }

    // Normalize to prevent faster diagonal movement
    direction.normalize_or_zero()
}

/// Handle movement keys.
///
/// Uses Rapier's KinematicCharacterController so walls and objects stop the
/// player.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut player_query: Query<(&MoveSpeed, &mut KinematicCharacterController), (With<Player>, Without<Blocked>)>,
) {
    let Ok((speed, mut controller)) = player_query.get_single_mut() else {
        return;
    };

    let direction = input_direction(&keyboard);
    if direction == Vec2::ZERO {
        return;
    }

    controller.translation = Some(direction * speed.0 * time.delta_secs());
}

/// Keep the camera centered on the player.
fn camera_follow(
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    let Ok(mut camera) = camera_query.get_single_mut() else {
        return;
    };

    camera.translation.x = player.translation.x;
    camera.translation.y = player.translation.y;
}

/// Spawn the player entity.
pub fn spawn_player(
    commands: &mut Commands,
    asset_server: &AssetServer,
    position: Vec2,
    tile_size: f32,
    tuning: &PlayerTuning,
) -> Entity {
    let size = Vec2::splat(tile_size * PLAYER_SCALE);
    let sprite = match &tuning.sprite {
        Some(path) => Sprite {
            image: asset_server.load(path),
            custom_size: Some(size),
            ..default()
        },
        None => Sprite::from_color(Color::srgb(0.9, 0.8, 0.35), size),
    };

    commands
        .spawn((
            Player,
            MoveSpeed(tuning.speed),
            sprite,
            Transform::from_translation(position.extend(PLAYER_Z)),
            // Rapier physics components
            RigidBody::KinematicPositionBased,
            Collider::cuboid(size.x / 2.0, size.y / 2.0),
            KinematicCharacterController::default(),
        ))
        .id()
}
