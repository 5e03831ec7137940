use bevy::prelude::*;

use crate::core::assets::{load_optional, AssetRoot, MissingAssets};
use crate::core::components::LevelScoped;
use crate::core::level::{CurrentLevel, LevelCatalog};
use crate::core::playfield::Playfield;

#[derive(Component)]
pub struct LevelBackground;

/// Stretch the current level's image over the playfield. Without the file the clear
/// colour shows through.
pub fn spawn_level_background(
    mut commands: Commands,
    server: Res<AssetServer>,
    root: Res<AssetRoot>,
    mut missing: ResMut<MissingAssets>,
    field: Res<Playfield>,
    current: Res<CurrentLevel>,
    catalog: Res<LevelCatalog>,
) {
    let Some(level) = catalog.get(current.0) else {
        return;
    };
    let Some(image) = load_optional::<Image>(&server, &root, &mut missing, &level.background, "background") else {
        return;
    };
    commands.spawn((
        Name::new(format!("Background:{}", level.id)),
        LevelBackground,
        LevelScoped,
        Sprite {
            image,
            custom_size: Some(Vec2::new(field.width, field.height)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, -10.0),
    ));
}
