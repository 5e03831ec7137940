use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{JumpState, Player};
use crate::core::config::GameConfig;
use crate::core::events::PlayerJumped;
use crate::core::system::system_order::PlayerInputSet;
use crate::interaction::input::{JumpBinding, JumpBindingPlugin};

pub struct JumpPlugin;

impl Plugin for JumpPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<JumpBindingPlugin>() {
            app.add_plugins(JumpBindingPlugin);
        }
        app.add_systems(
            Update,
            handle_jump_input
                .in_set(PlayerInputSet)
                .run_if(in_state(AppState::Playing)),
        );
    }
}

/// Press: forward speed, zero vertical speed, upward impulse. Release while rising:
/// vertical speed scaled by `jump.release_scale`.
pub fn handle_jump_input(
    keys: Res<ButtonInput<KeyCode>>,
    binding: Res<JumpBinding>,
    cfg: Res<GameConfig>,
    mut q_player: Query<(&mut Velocity, &mut ExternalImpulse, &mut JumpState), With<Player>>,
    mut jumped: EventWriter<PlayerJumped>,
) {
    let key = binding.0;
    for (mut vel, mut impulse, mut jump) in &mut q_player {
        if keys.just_pressed(key) && !jump.held {
            vel.linvel = Vec2::new(cfg.jump.forward_speed, 0.0);
            impulse.impulse += Vec2::new(0.0, cfg.jump.impulse);
            jump.held = true;
            jumped.write(PlayerJumped);
        }
        if keys.just_released(key) {
            if vel.linvel.y > 0.0 {
                vel.linvel.y *= cfg.jump.release_scale;
            }
            jump.held = false;
        }
    }
}
