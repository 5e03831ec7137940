pub mod hud;
pub mod prompt;

use bevy::prelude::*;

/// Screen-space overlays: the level HUD and the modal win / lose prompts.
pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((hud::HudPlugin, prompt::PromptPlugin));
    }
}
