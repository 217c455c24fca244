//! Combat module - attack resolution and the scene hand-off it triggers.

mod components;
mod plugin;
mod resolver;
mod systems;

#[cfg(test)]
mod tests;

pub use components::*;
pub use plugin::CombatPlugin;
pub use resolver::{AttackOutcome, CombatResolver};
