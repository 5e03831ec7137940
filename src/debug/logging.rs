use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::app::state::AppState;
use crate::core::components::Player;
use crate::core::level::CurrentLevel;

#[derive(Resource, Debug)]
pub struct DebugState {
    pub frame_counter: u64,
    pub time_accum: f32,
    pub log_interval: f32,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            frame_counter: 0,
            time_accum: 0.0,
            log_interval: 1.0,
        }
    }
}

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    app_state: Res<State<AppState>>,
    current: Res<CurrentLevel>,
    q_player: Query<(&Transform, &Velocity), With<Player>>,
) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    let (pos, vel) = q_player
        .iter()
        .next()
        .map(|(tf, v)| (tf.translation.truncate(), v.linvel))
        .unwrap_or_default();
    info!(
        "SIM frame={} t={:.3}s state={:?} level={} pos=({:.1},{:.1}) vel=({:.1},{:.1})",
        state.frame_counter,
        time.elapsed_secs(),
        app_state.get(),
        current.0 + 1,
        pos.x,
        pos.y,
        vel.x,
        vel.y
    );
}
