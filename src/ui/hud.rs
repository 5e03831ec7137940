use bevy::prelude::*;

use crate::core::level::{CurrentLevel, LevelCatalog};
use crate::interaction::input::JumpBinding;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud).add_systems(
            Update,
            update_hud_text.run_if(
                resource_changed::<CurrentLevel>
                    .or(resource_changed::<LevelCatalog>)
                    .or(resource_changed::<JumpBinding>),
            ),
        );
    }
}

/// Marker for the HUD text node.
#[derive(Component)]
pub struct LevelHud;

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("LevelHud"),
        LevelHud,
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

/// "W" for `KeyW`, "1" for `Digit1`, the debug name otherwise.
pub fn key_label(key: KeyCode) -> String {
    let raw = format!("{key:?}");
    raw.strip_prefix("Key")
        .or_else(|| raw.strip_prefix("Digit"))
        .unwrap_or(raw.as_str())
        .to_string()
}

pub fn hud_text(current: CurrentLevel, catalog: &LevelCatalog, key: KeyCode) -> String {
    let name = catalog
        .get(current.0)
        .map(|l| l.name.as_str())
        .unwrap_or("?");
    format!(
        "Level {}/{}: {}\n[{}] jump (hold longer to rise higher)",
        current.0 + 1,
        catalog.len(),
        name,
        key_label(key)
    )
}

fn update_hud_text(
    current: Res<CurrentLevel>,
    catalog: Res<LevelCatalog>,
    binding: Res<JumpBinding>,
    mut q_text: Query<&mut Text, With<LevelHud>>,
) {
    let s = hud_text(*current, &catalog, binding.0);
    for mut text in &mut q_text {
        if text.0 != s {
            text.0 = s.clone();
        }
    }
}
