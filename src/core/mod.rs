pub mod assets;
pub mod components;
pub mod config;
pub mod events;
pub mod level;
pub mod playfield;
pub mod system;
