use bevy::prelude::*;

/// High-level game lifecycle state.
/// Playing -> (GameOver | LevelComplete | Victory) -> Playing, or exit from any prompt.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Physics running, input live.
    #[default]
    Playing,
    /// The circle touched a band; waiting for restart / quit.
    GameOver,
    /// Right edge reached on a level that has a successor.
    LevelComplete,
    /// Right edge reached on the last level.
    Victory,
}

impl AppState {
    pub fn is_prompt(&self) -> bool {
        !matches!(self, AppState::Playing)
    }
}
