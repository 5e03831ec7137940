use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::core::level::band::BandContact;
use crate::core::level::levels::{default_levels, LevelConfig};
use crate::core::playfield::Playfield;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Game".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub pixels_per_meter: f32,
    /// Vertical gravity in px/s^2; negative pulls down.
    pub gravity_y: f32,
    /// Fixed physics steps per second.
    pub step_hz: f64,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 100.0,
            gravity_y: -350.0,
            step_hz: 60.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub radius: f32,
    /// Distance of the spawn point from the left playfield edge.
    pub start_offset_x: f32,
    pub mass: f32,
    /// Linear RGB triple used for the circle visual.
    pub color: [f32; 3],
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            start_offset_x: 10.0,
            mass: 1.0,
            color: [0.0, 0.0, 1.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct JumpConfig {
    /// Key name, e.g. "W", "Space", "ArrowUp".
    pub key: String,
    /// Upward impulse applied on press (px/s for a unit mass).
    pub impulse: f32,
    /// Horizontal speed assigned on every press.
    pub forward_speed: f32,
    /// Factor applied to a rising vertical velocity when the key is released.
    pub release_scale: f32,
}
impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            key: "W".into(),
            impulse: 180.0,
            forward_speed: 200.0,
            release_scale: -0.2,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub volume: f32,
    pub background: String,
    pub jump: String,
    pub collision: String,
}
impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.8,
            background: "audio/background.wav".into(),
            jump: "audio/jump.wav".into(),
            collision: "audio/collision.wav".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub jump: JumpConfig,
    pub audio: AudioConfig,
    pub levels: Vec<LevelConfig>,
    /// Zero-based index of the level played first.
    pub start_level: usize,
    pub draw_bands: bool,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            physics: Default::default(),
            player: Default::default(),
            jump: Default::default(),
            audio: Default::default(),
            levels: default_levels(),
            start_level: 0,
            draw_bands: true,
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON {}", path.display()))
    }

    /// Merge several RON files in order; later maps override keys of earlier ones.
    /// Returns the config, the paths that contributed, and per-file errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let value = match bm.remove(&k) {
                            Some(mut existing) => {
                                merge_value(&mut existing, v);
                                existing
                            }
                            None => v,
                        };
                        bm.insert(k, value);
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Non-fatal sanity warnings; the game still runs with a config that produces some.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }
        if self.physics.step_hz <= 0.0 {
            w.push("physics.step_hz must be > 0".into());
        }
        if self.physics.gravity_y > 0.0 {
            w.push(format!(
                "physics.gravity_y is positive ({}); the circle will fall upward",
                self.physics.gravity_y
            ));
        }
        if self.player.radius <= 0.0 {
            w.push("player.radius must be > 0".into());
        }
        if self.player.mass <= 0.0 {
            w.push("player.mass must be > 0".into());
        }
        if self.player.start_offset_x < 0.0 || self.player.start_offset_x > self.window.width {
            w.push(format!(
                "player.start_offset_x {} outside the playfield width {}",
                self.player.start_offset_x, self.window.width
            ));
        }
        if self.jump.key.trim().is_empty() {
            w.push("jump.key empty; falling back to W".into());
        }
        if self.jump.impulse <= 0.0 {
            w.push("jump.impulse must be > 0".into());
        }
        if self.jump.forward_speed <= 0.0 {
            w.push("jump.forward_speed <= 0; the right edge is unreachable".into());
        }
        if self.levels.is_empty() {
            w.push("levels list empty; built-in levels will be used".into());
        }
        if self.start_level >= self.levels.len().max(1) {
            w.push(format!(
                "start_level {} out of range (levels={})",
                self.start_level,
                self.levels.len()
            ));
        }
        let field = Playfield::from_config(self);
        for level in &self.levels {
            let room = level.band.opening(&field);
            if room <= self.player.radius * 2.0 {
                w.push(format!(
                    "level '{}' corridor height {room} leaves no room for a circle of radius {}",
                    level.id, self.player.radius
                ));
            } else if level.band.check(0.0, self.player.radius, &field) != BandContact::Inside {
                let (ceiling, floor) = level.band.edges(&field);
                w.push(format!(
                    "level '{}' corridor y in ({floor}, {ceiling}) misses the spawn height 0; every run crashes at once",
                    level.id
                ));
            }
            if level.band.top < 0.0 || level.band.bottom < 0.0 {
                w.push(format!("level '{}' has a negative band offset", level.id));
            }
        }
        w
    }

    /// Level list with the built-in levels substituted for an empty list.
    pub fn effective_levels(&self) -> Vec<LevelConfig> {
        if self.levels.is_empty() {
            default_levels()
        } else {
            self.levels.clone()
        }
    }
}
