//! UI plugin - HUD and interface elements.

use bevy::prelude::*;

use super::hud;

/// UI plugin - handles the gameplay HUD.
///
/// The dialogue box belongs to the dialogue plugin.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);
    }
}
