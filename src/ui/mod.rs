//! UI module - HUD.

mod hud;
mod plugin;

pub use hud::HudRoot;
pub use plugin::UiPlugin;
