//! Blazor Vortex - a small top-down action game in Bevy.
//!
//! A tile-map world with a player, roaming enemies, and scripted
//! conversations that suspend gameplay while they play.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, frame ordering, input sampling, events, config
//! - **Dialogue**: Missions, typewriter text, dialogue/gameplay mode switching
//! - **Combat**: Proximity attacks, defeat tracking, post-victory hand-off
//! - **Player**: Top-down movement, camera follow
//! - **Enemies**: Animation sets, chasing
//! - **World**: Level loading and construction
//! - **UI**: HUD

pub mod combat;
pub mod core;
pub mod dialogue;
pub mod enemies;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct BlazorVortexPlugin;

impl Plugin for BlazorVortexPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Missions and mode switching
            .add_plugins(dialogue::DialoguePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
