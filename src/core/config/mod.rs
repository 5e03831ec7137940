pub mod config;

pub use config::{
    AudioConfig, GameConfig, JumpConfig, PhysicsConfig, PlayerConfig, WindowConfig,
};
