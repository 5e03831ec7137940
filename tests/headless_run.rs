//! Runs rapier headless with a manual clock to check the full play loop:
//! spawn, fall, jump, crash and the state change that follows.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier2d::prelude::Velocity;

use corridor_jumper::core::events::GameEventsPlugin;
use corridor_jumper::core::level::LevelPlugin;
use corridor_jumper::gameplay::GameplayPlugin;
use corridor_jumper::physics::PhysicsSetupPlugin;
use corridor_jumper::ui::prompt::PromptPlugin;
use corridor_jumper::{AppState, GameConfig, Player};

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, TransformPlugin, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )));
    app.insert_resource(GameConfig::default());
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_state::<AppState>();
    app.add_plugins((
        GameEventsPlugin,
        LevelPlugin,
        PhysicsSetupPlugin,
        GameplayPlugin,
        PromptPlugin,
    ));
    app
}

fn player(app: &mut App) -> (Vec2, Vec2) {
    let world = app.world_mut();
    let mut q = world.query_filtered::<(&Transform, &Velocity), With<Player>>();
    let (tf, vel) = q.single(world).expect("one player");
    (tf.translation.truncate(), vel.linvel)
}

fn run_until_game_over(app: &mut App) {
    let mut frames = 0;
    while state(app) == AppState::Playing && frames < 300 {
        app.update();
        frames += 1;
    }
    assert_eq!(state(app), AppState::GameOver, "no crash after {frames} frames");
}

fn state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

#[test]
fn idle_player_falls_into_the_floor_band() {
    let mut app = headless_app();
    app.update();
    let (start, _) = player(&mut app);
    assert_eq!(start, Vec2::new(-390.0, 0.0));

    run_until_game_over(&mut app);
    let (pos, _) = player(&mut app);
    assert!(pos.y < 0.0, "player should have fallen, y={}", pos.y);
    assert!((pos.x - start.x).abs() < 1.0, "idle player must not drift, x={}", pos.x);
}

#[test]
fn jump_moves_player_forward_and_up() {
    let mut app = headless_app();
    app.update();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyW);
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();

    for _ in 0..10 {
        app.update();
    }
    let (pos, vel) = player(&mut app);
    assert_eq!(state(&app), AppState::Playing);
    assert!(pos.x > -390.0 + 20.0, "x={}", pos.x);
    assert!(pos.y > 0.0, "y={}", pos.y);
    assert!((vel.x - 200.0).abs() < 1.0, "vx={}", vel.x);
}

#[test]
fn game_over_freezes_the_body_and_yes_respawns_it() {
    let mut app = headless_app();
    app.update();
    run_until_game_over(&mut app);

    let (frozen, _) = player(&mut app);
    for _ in 0..30 {
        app.update();
    }
    let (after, _) = player(&mut app);
    assert_eq!(after, frozen, "body moved while the prompt was up");
    assert_eq!(state(&app), AppState::GameOver);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyY);
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(KeyCode::KeyY);
    app.update();
    app.update();

    assert_eq!(state(&app), AppState::Playing);
    let (pos, vel) = player(&mut app);
    assert!((pos.x + 390.0).abs() < 0.5, "x={}", pos.x);
    assert!(pos.y.abs() < 2.0, "y={}", pos.y);
    assert!(vel.y.abs() < 30.0, "vy={}", vel.y);
}
