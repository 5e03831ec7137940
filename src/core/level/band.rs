//! Boundary bands: the per-level corridor the player circle must stay inside.
//!
//! Offsets are authored in screen pixels (top offset from the top edge, bottom offset
//! from the bottom edge). Checks run in world space: origin at the playfield centre, y up.

use serde::Deserialize;

use crate::core::playfield::Playfield;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct BoundaryBand {
    /// Pixels from the top playfield edge down to the corridor ceiling.
    pub top: f32,
    /// Pixels from the bottom playfield edge up to the corridor floor.
    pub bottom: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandContact {
    Inside,
    Top,
    Bottom,
}

impl BoundaryBand {
    pub const fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// World-space y of the corridor ceiling and floor.
    pub fn edges(&self, field: &Playfield) -> (f32, f32) {
        let half_h = field.height * 0.5;
        (half_h - self.top, -half_h + self.bottom)
    }

    /// Classify a circle at height `y`. Touching an edge counts as contact; the ceiling
    /// wins when a circle is tall enough to touch both.
    pub fn check(&self, y: f32, radius: f32, field: &Playfield) -> BandContact {
        let (ceiling, floor) = self.edges(field);
        if y + radius >= ceiling {
            BandContact::Top
        } else if y - radius <= floor {
            BandContact::Bottom
        } else {
            BandContact::Inside
        }
    }

    /// Corridor height in pixels (may be negative for a closed band).
    pub fn opening(&self, field: &Playfield) -> f32 {
        field.height - self.top - self.bottom
    }
}
