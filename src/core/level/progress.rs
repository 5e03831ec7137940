use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::playfield::Playfield;

use super::levels::LevelCatalog;

/// Index of the level being played. A single index keeps exactly one level active.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrentLevel(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAdvance {
    Next(usize),
    Finished,
}

impl CurrentLevel {
    pub fn is_last(&self, total: usize) -> bool {
        self.0 + 1 >= total
    }

    pub fn advance(&self, total: usize) -> LevelAdvance {
        if self.is_last(total) {
            LevelAdvance::Finished
        } else {
            LevelAdvance::Next(self.0 + 1)
        }
    }
}

/// Keeps `LevelCatalog`, `Playfield` and `CurrentLevel` in step with `GameConfig`.
pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        let (catalog, field, start) = match app.world().get_resource::<GameConfig>() {
            Some(cfg) => (
                LevelCatalog(cfg.effective_levels()),
                Playfield::from_config(cfg),
                cfg.start_level,
            ),
            None => (LevelCatalog::default(), Playfield::default(), 0),
        };
        let start = start.min(catalog.len().saturating_sub(1));
        app.insert_resource(catalog)
            .insert_resource(field)
            .insert_resource(CurrentLevel(start))
            .add_systems(
                PreUpdate,
                sync_levels_from_config.run_if(resource_changed::<GameConfig>),
            );
    }
}

fn sync_levels_from_config(
    cfg: Res<GameConfig>,
    mut catalog: ResMut<LevelCatalog>,
    mut field: ResMut<Playfield>,
    mut current: ResMut<CurrentLevel>,
) {
    let levels = cfg.effective_levels();
    if catalog.0 != levels {
        info!(target: "level", "Level catalog updated: {} level(s)", levels.len());
        catalog.0 = levels;
    }
    field.set_if_neq(Playfield::from_config(&cfg));
    let max = catalog.len().saturating_sub(1);
    if current.0 > max {
        warn!(target: "level", "Current level {} no longer exists; clamping to {}", current.0 + 1, max + 1);
        current.0 = max;
    }
}
