use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{JumpState, Player, PlayerRadius};
use crate::core::config::GameConfig;
use crate::core::level::{CurrentLevel, LevelCatalog};
use crate::core::playfield::Playfield;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), enter_level);
    }
}

/// Physics-side components of the player circle. Visuals are attached by the renderer.
pub fn player_bundle(cfg: &GameConfig, field: &Playfield) -> impl Bundle {
    let radius = cfg.player.radius.max(0.5);
    let spawn = field.spawn_point(cfg.player.start_offset_x);
    (
        Name::new("Player"),
        Player,
        PlayerRadius(radius),
        JumpState::default(),
        Transform::from_translation(spawn.extend(1.0)),
        Visibility::default(),
        RigidBody::Dynamic,
        Collider::ball(radius),
        ColliderMassProperties::Mass(cfg.player.mass.max(0.001)),
        Velocity::zero(),
        ExternalImpulse::default(),
        LockedAxes::ROTATION_LOCKED,
        Damping {
            linear_damping: 0.0,
            angular_damping: 0.0,
        },
    )
}

/// Spawn the player on first entry, otherwise put it back at the spawn point at rest.
pub fn enter_level(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    field: Res<Playfield>,
    current: Res<CurrentLevel>,
    catalog: Res<LevelCatalog>,
    mut q_player: Query<
        (
            Entity,
            &mut Transform,
            &mut Velocity,
            &mut ExternalImpulse,
            &mut JumpState,
            &mut PlayerRadius,
        ),
        With<Player>,
    >,
) {
    if let Some(level) = catalog.get(current.0) {
        info!(
            target: "level",
            "Entering level {}/{} '{}' (band top={} bottom={})",
            current.0 + 1,
            catalog.len(),
            level.name,
            level.band.top,
            level.band.bottom
        );
    }

    if q_player.is_empty() {
        commands.spawn(player_bundle(&cfg, &field));
        return;
    }

    let spawn = field.spawn_point(cfg.player.start_offset_x);
    let radius = cfg.player.radius.max(0.5);
    for (entity, mut tf, mut vel, mut impulse, mut jump, mut player_radius) in &mut q_player {
        tf.translation = spawn.extend(tf.translation.z);
        tf.rotation = Quat::IDENTITY;
        *vel = Velocity::zero();
        impulse.impulse = Vec2::ZERO;
        impulse.torque_impulse = 0.0;
        jump.held = false;
        if player_radius.0 != radius {
            player_radius.0 = radius;
            commands.entity(entity).insert(Collider::ball(radius));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.insert_resource(GameConfig::default());
        app.insert_resource(Playfield::default());
        app.insert_resource(CurrentLevel(0));
        app.init_resource::<LevelCatalog>();
        app.init_state::<AppState>();
        app.add_plugins(PlayerPlugin);
        app
    }

    fn player_state(app: &mut App) -> (Vec3, Velocity, JumpState) {
        let world = app.world_mut();
        let mut q = world.query_filtered::<(&Transform, &Velocity, &JumpState), With<Player>>();
        let (tf, vel, jump) = q.single(world).unwrap();
        (tf.translation, *vel, *jump)
    }

    #[test]
    fn spawns_player_at_left_edge_once() {
        let mut app = test_app();
        app.update();
        let world = app.world_mut();
        let count = world.query::<&Player>().iter(world).count();
        assert_eq!(count, 1);
        let (pos, vel, _) = player_state(&mut app);
        assert_eq!(pos.truncate(), Vec2::new(-390.0, 0.0));
        assert_eq!(vel.linvel, Vec2::ZERO);
    }

    #[test]
    fn reentering_playing_resets_player() {
        let mut app = test_app();
        app.update();
        {
            let world = app.world_mut();
            let mut q = world.query_filtered::<(&mut Transform, &mut Velocity, &mut JumpState), With<Player>>();
            let (mut tf, mut vel, mut jump) = q.single_mut(world).unwrap();
            tf.translation = Vec3::new(120.0, 50.0, 1.0);
            vel.linvel = Vec2::new(200.0, -40.0);
            jump.held = true;
        }
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::GameOver);
        app.update();
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Playing);
        app.update();

        let (pos, vel, jump) = player_state(&mut app);
        assert_eq!(pos, Vec3::new(-390.0, 0.0, 1.0));
        assert_eq!(vel.linvel, Vec2::ZERO);
        assert!(!jump.held);
        let world = app.world_mut();
        assert_eq!(world.query::<&Player>().iter(world).count(), 1);
    }
}
