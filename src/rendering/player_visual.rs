use bevy::prelude::*;

use crate::core::components::{Player, PlayerRadius};
use crate::core::config::GameConfig;

/// Tag for the circle mesh child of the player.
#[derive(Component)]
pub struct PlayerCircleVisual;

/// Shared unit circle (radius 0.5), scaled per entity.
#[derive(Resource, Clone)]
pub struct CircleMesh(pub Handle<Mesh>);

pub struct PlayerVisualPlugin;

impl Plugin for PlayerVisualPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_circle_mesh).add_systems(
            Update,
            (attach_player_visual, sync_visual_radius).chain(),
        );
    }
}

fn setup_circle_mesh(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let handle = meshes.add(Mesh::from(Circle { radius: 0.5 }));
    commands.insert_resource(CircleMesh(handle));
}

fn attach_player_visual(
    mut commands: Commands,
    circle: Option<Res<CircleMesh>>,
    cfg: Res<GameConfig>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    q_new: Query<(Entity, &PlayerRadius), Added<Player>>,
) {
    let Some(circle) = circle else { return };
    for (entity, radius) in &q_new {
        let [r, g, b] = cfg.player.color;
        let material = materials.add(Color::srgb(r, g, b));
        commands.entity(entity).with_children(|parent| {
            parent.spawn((
                PlayerCircleVisual,
                Mesh2d(circle.0.clone()),
                MeshMaterial2d(material),
                Transform::from_scale(Vec3::splat(radius.0 * 2.0)),
            ));
        });
    }
}

fn sync_visual_radius(
    q_player: Query<(&PlayerRadius, &Children), (With<Player>, Changed<PlayerRadius>)>,
    mut q_visual: Query<&mut Transform, With<PlayerCircleVisual>>,
) {
    for (radius, children) in &q_player {
        for child in &children[..] {
            if let Ok(mut tf) = q_visual.get_mut(*child) {
                tf.scale = Vec3::splat(radius.0 * 2.0);
            }
        }
    }
}
