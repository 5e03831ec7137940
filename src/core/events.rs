use bevy::prelude::*;

use crate::core::level::BandContact;

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PlayerJumped;

/// The player touched the corridor ceiling or floor.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCrashed {
    pub contact: BandContact,
}

/// The player reached the right edge of the level with this index.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCleared {
    pub level: usize,
}

pub struct GameEventsPlugin;

impl Plugin for GameEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerJumped>()
            .add_event::<PlayerCrashed>()
            .add_event::<LevelCleared>();
    }
}
