//! Enemies module - enemy entities, chasing and animation.

mod ai;
mod components;
pub mod data;
mod plugin;
mod spawning;

#[cfg(test)]
mod tests;

pub use components::*;
pub use data::{EnemyFrameSet, EnemyFrames};
pub use plugin::EnemyPlugin;
pub use spawning::spawn_enemy;
