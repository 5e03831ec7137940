//! Debug module: feature gated state logging and the rapier wireframe toggle.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;

#[cfg(feature = "debug")]
pub use logging::DebugState;

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier2d::render::RapierDebugRenderPlugin;

        let wireframe = app
            .world()
            .get_resource::<crate::core::config::GameConfig>()
            .map(|c| c.rapier_debug)
            .unwrap_or(false);
        app.init_resource::<DebugState>()
            .add_plugins(RapierDebugRenderPlugin {
                enabled: wireframe,
                ..default()
            })
            .add_systems(
                Update,
                (keys::debug_key_input_system, logging::debug_logging_system),
            );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;

#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
