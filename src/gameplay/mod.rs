//! Gameplay: the player body, jump input, corridor checks and their outcomes.

pub mod boundary;
pub mod jump;
pub mod outcome;
pub mod player;

use bevy::prelude::*;

pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            player::PlayerPlugin,
            jump::JumpPlugin,
            boundary::BoundaryPlugin,
            outcome::OutcomePlugin,
        ));
    }
}
