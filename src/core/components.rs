use bevy::prelude::*;

/// Marker for the player circle (holds the rigid body and collider).
#[derive(Component, Debug, Default)]
pub struct Player;

/// Radius used by the collider, the visual and the boundary checks.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone, PartialEq)]
pub struct PlayerRadius(pub f32);

/// Whether the jump key is currently held; a new jump needs a release first.
#[derive(Component, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct JumpState {
    pub held: bool,
}

/// Entities despawned whenever a level is (re)entered.
#[derive(Component, Debug, Default)]
pub struct LevelScoped;
