use bevy::prelude::*;

use crate::core::components::LevelScoped;
use crate::core::config::GameConfig;
use crate::core::level::{BoundaryBand, CurrentLevel, LevelCatalog};
use crate::core::playfield::Playfield;

const BAND_NAME: [&str; 2] = ["BandTop", "BandBottom"];

#[derive(Component)]
pub struct BandVisual;

/// Centre and size of the strips above the ceiling and below the floor.
pub fn band_rects(band: &BoundaryBand, field: &Playfield) -> [(Vec2, Vec2); 2] {
    let half_h = field.height * 0.5;
    let top = band.top.max(0.0);
    let bottom = band.bottom.max(0.0);
    [
        (
            Vec2::new(0.0, half_h - top * 0.5),
            Vec2::new(field.width, top),
        ),
        (
            Vec2::new(0.0, -half_h + bottom * 0.5),
            Vec2::new(field.width, bottom),
        ),
    ]
}

pub fn spawn_band_visuals(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    field: Res<Playfield>,
    current: Res<CurrentLevel>,
    catalog: Res<LevelCatalog>,
) {
    if !cfg.draw_bands {
        return;
    }
    let Some(level) = catalog.get(current.0) else {
        return;
    };
    let band_color = Color::srgba(0.18, 0.12, 0.08, 0.55);
    for (index, (center, size)) in band_rects(&level.band, &field).into_iter().enumerate() {
        if size.y <= 0.0 {
            continue;
        }
        commands.spawn((
            Name::new(BAND_NAME[index]),
            BandVisual,
            LevelScoped,
            Sprite {
                color: band_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(-5.0)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_cover_the_area_outside_the_corridor() {
        let field = Playfield::new(800.0, 600.0);
        let band = BoundaryBand::new(190.0, 205.0);
        let [(top_c, top_s), (bot_c, bot_s)] = band_rects(&band, &field);
        assert_eq!(top_s, Vec2::new(800.0, 190.0));
        assert_eq!(bot_s, Vec2::new(800.0, 205.0));
        // Inner edges coincide with the band edges used by the checks.
        let (ceiling, floor) = band.edges(&field);
        assert_eq!(top_c.y - top_s.y * 0.5, ceiling);
        assert_eq!(bot_c.y + bot_s.y * 0.5, floor);
    }
}
