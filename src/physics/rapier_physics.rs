use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;

/// Wrapper configuring Rapier: fixed-step world stepping, gravity from config, and
/// pausing the pipeline whenever a prompt is up.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let (pixels_per_meter, step_hz) = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| (c.physics.pixels_per_meter, c.physics.step_hz))
            .unwrap_or((100.0, 60.0));
        let step_hz = if step_hz > 0.0 { step_hz } else { 60.0 };

        app.add_plugins(
            RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(pixels_per_meter)
                .in_fixed_schedule(),
        )
        // Inserted after the plugin so its defaults do not win.
        .insert_resource(TimestepMode::Fixed {
            dt: (1.0 / step_hz) as f32,
            substeps: 1,
        })
        .insert_resource(Time::<Fixed>::from_hz(step_hz))
        .add_systems(Update, apply_config_gravity)
        .add_systems(OnEnter(AppState::Playing), resume_physics)
        .add_systems(OnExit(AppState::Playing), pause_physics);
    }
}

fn apply_config_gravity(cfg: Res<GameConfig>, mut q_cfg: Query<&mut RapierConfiguration>) {
    let gravity = Vect::new(0.0, cfg.physics.gravity_y);
    for mut rapier_cfg in &mut q_cfg {
        if rapier_cfg.gravity != gravity {
            rapier_cfg.gravity = gravity;
            debug!(target: "physics", "Gravity -> ({:.1}, {:.1})", gravity.x, gravity.y);
        }
    }
}

fn set_pipeline_active(q_cfg: &mut Query<&mut RapierConfiguration>, active: bool) {
    for mut rapier_cfg in q_cfg.iter_mut() {
        rapier_cfg.physics_pipeline_active = active;
    }
}

fn resume_physics(mut q_cfg: Query<&mut RapierConfiguration>) {
    set_pipeline_active(&mut q_cfg, true);
}

fn pause_physics(mut q_cfg: Query<&mut RapierConfiguration>) {
    set_pipeline_active(&mut q_cfg, false);
    info!(target: "physics", "Physics paused");
}
