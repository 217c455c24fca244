//! Player module - player entity, movement, and camera follow.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::spawn_player;
pub use plugin::PlayerPlugin;
