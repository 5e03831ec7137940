use bevy::prelude::*;
use bevy_rapier2d::prelude::PhysicsSet;

use crate::app::state::AppState;
use crate::core::components::{Player, PlayerRadius};
use crate::core::events::{LevelCleared, PlayerCrashed};
use crate::core::level::{BandContact, CurrentLevel, LevelCatalog};
use crate::core::playfield::Playfield;
use crate::core::system::system_order::BoundaryCheckSet;

pub struct BoundaryPlugin;

impl Plugin for BoundaryPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedPostUpdate,
            BoundaryCheckSet.after(PhysicsSet::Writeback),
        )
        .add_systems(
            FixedPostUpdate,
            check_player_bounds
                .in_set(BoundaryCheckSet)
                .run_if(in_state(AppState::Playing)),
        );
    }
}

/// Run once per physics step: a band contact ends the run, otherwise reaching the
/// right edge clears the level.
pub fn check_player_bounds(
    field: Res<Playfield>,
    catalog: Res<LevelCatalog>,
    current: Res<CurrentLevel>,
    q_player: Query<(&Transform, &PlayerRadius), With<Player>>,
    mut crashed: EventWriter<PlayerCrashed>,
    mut cleared: EventWriter<LevelCleared>,
) {
    let Some(level) = catalog.get(current.0) else {
        return;
    };
    for (tf, radius) in &q_player {
        let pos = tf.translation.truncate();
        let contact = level.band.check(pos.y, radius.0, &field);
        if contact != BandContact::Inside {
            debug!(target: "level", "Band contact {:?} at ({:.1}, {:.1})", contact, pos.x, pos.y);
            crashed.write(PlayerCrashed { contact });
        } else if pos.x >= field.finish_x(radius.0) {
            debug!(target: "level", "Finish line reached at x={:.1}", pos.x);
            cleared.write(LevelCleared { level: current.0 });
        }
    }
}
