//! Blazor Vortex - Entry Point
//!
//! Controls:
//! - WASD / arrows: Move
//! - Left click: Attack
//! - Space: Skip typing / next line
//! - Escape: Quit

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Blazor Vortex".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics, tuned for pixel-sized tiles
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(64.0))

        // Our game plugin
        .add_plugins(blazor_vortex::BlazorVortexPlugin)

        .run();
}
