pub mod game;
pub mod state;

pub use game::GamePlugin;
pub use state::AppState;
