use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Logical play area in pixels, centred on the world origin.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(cfg: &GameConfig) -> Self {
        Self::new(cfg.window.width, cfg.window.height)
    }

    /// Player spawn: `offset_x` pixels in from the left edge, vertically centred.
    pub fn spawn_point(&self, offset_x: f32) -> Vec2 {
        Vec2::new(-self.width * 0.5 + offset_x, 0.0)
    }

    /// Smallest centre x at which a circle of `radius` has reached the right edge.
    pub fn finish_x(&self, radius: f32) -> f32 {
        self.width * 0.5 - radius
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
