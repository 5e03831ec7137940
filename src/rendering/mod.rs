pub mod background;
pub mod bands;
pub mod camera;
pub mod player_visual;

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::LevelScoped;

/// Camera, per-level scenery and the player circle visual.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            camera::CameraPlugin,
            player_visual::PlayerVisualPlugin,
        ))
        .add_systems(
            OnEnter(AppState::Playing),
            (
                despawn_level_scoped,
                background::spawn_level_background,
                bands::spawn_band_visuals,
            )
                .chain(),
        );
    }
}

fn despawn_level_scoped(mut commands: Commands, q: Query<Entity, With<LevelScoped>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
