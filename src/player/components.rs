//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Movement suppressed until a mission hands control back.
///
/// Used on the player and on enemies.
#[derive(Component, Debug)]
pub struct Blocked;

/// Movement speed in pixels per second.
#[derive(Component, Debug, Clone, Copy)]
pub struct MoveSpeed(pub f32);
