pub mod band;
pub mod levels;
pub mod progress;

pub use band::{BandContact, BoundaryBand};
pub use levels::{default_levels, resolve_level, LevelCatalog, LevelConfig};
pub use progress::{CurrentLevel, LevelAdvance, LevelPlugin};
