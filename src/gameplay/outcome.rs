use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::events::{LevelCleared, PlayerCrashed};
use crate::core::level::{CurrentLevel, LevelCatalog};
use crate::core::system::system_order::{OutcomeSet, PlayerInputSet};

pub struct OutcomePlugin;

impl Plugin for OutcomePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, OutcomeSet.after(PlayerInputSet))
            .add_systems(
                Update,
                apply_outcomes
                    .in_set(OutcomeSet)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

/// Map the first crash / clear of the frame onto the next `AppState`.
pub fn apply_outcomes(
    mut crashed: EventReader<PlayerCrashed>,
    mut cleared: EventReader<LevelCleared>,
    current: Res<CurrentLevel>,
    catalog: Res<LevelCatalog>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if let Some(ev) = crashed.read().next().copied() {
        info!(target: "level", "Game over on level {} ({:?} band)", current.0 + 1, ev.contact);
        next_state.set(AppState::GameOver);
        crashed.clear();
        cleared.clear();
        return;
    }
    if let Some(ev) = cleared.read().next().copied() {
        let state = if current.is_last(catalog.len()) {
            AppState::Victory
        } else {
            AppState::LevelComplete
        };
        info!(target: "level", "Level {} cleared -> {:?}", ev.level + 1, state);
        next_state.set(state);
        cleared.clear();
    }
}
