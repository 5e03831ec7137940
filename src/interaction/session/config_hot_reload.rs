use bevy::prelude::*;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::SystemTime,
};

use crate::core::config::GameConfig;

/// Files polled for changes, in layering order.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/game.ron"),
                PathBuf::from("assets/config/game.local.ron"),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl FromWorld for ConfigReloadState {
    fn from_world(world: &mut World) -> Self {
        let interval = world
            .get_resource::<ConfigReloadSettings>()
            .map(|s| s.interval_secs)
            .unwrap_or(0.5)
            .max(0.05);
        // Seed with current mtimes so startup does not count as a change.
        let mut last_mod = HashMap::new();
        if let Some(settings) = world.get_resource::<ConfigReloadSettings>() {
            for path in &settings.paths {
                if let Some(t) = modified(path) {
                    last_mod.insert(path.clone(), t);
                }
            }
        }
        Self {
            last_mod,
            timer: Timer::from_seconds(interval, TimerMode::Repeating),
        }
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Values that must survive a reload because they came from the command line.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub auto_close: Option<f32>,
    pub start_level: Option<usize>,
}

impl ConfigOverrides {
    pub fn apply(&self, cfg: &mut GameConfig) {
        if let Some(secs) = self.auto_close {
            cfg.window.auto_close = secs;
        }
        if let Some(level) = self.start_level {
            cfg.start_level = level;
        }
    }
}

pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfigReloadSettings>()
            .init_resource::<ConfigOverrides>()
            .init_resource::<ConfigReloadState>()
            .add_systems(Update, poll_and_reload_config);
    }
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    overrides: Res<ConfigOverrides>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    mut windows: Query<&mut Window>,
) {
    if !state.timer.tick(time.delta()).just_finished() {
        return;
    }
    let mut dirty = false;
    for path in &settings.paths {
        if let Some(mod_time) = modified(path) {
            let entry = state
                .last_mod
                .entry(path.clone())
                .or_insert(SystemTime::UNIX_EPOCH);
            if mod_time > *entry {
                *entry = mod_time;
                dirty = true;
            }
        }
    }
    if !dirty {
        return;
    }
    let (mut new_cfg, _used, errors) = GameConfig::load_layered(settings.paths.iter());
    for e in errors {
        warn!(target: "config", "CONFIG HOT-RELOAD issue: {e}");
    }
    overrides.apply(&mut new_cfg);
    for w in new_cfg.validate() {
        warn!(target: "config", "{w}");
    }
    if *cfg_res == new_cfg {
        return;
    }
    info!(target: "config", "Config hot-reload applied");
    if let Ok(mut window) = windows.single_mut() {
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window
                .resolution
                .set(new_cfg.window.width, new_cfg.window.height);
        }
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    *cfg_res = new_cfg;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    #[test]
    fn edited_file_replaces_config_and_keeps_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ron");
        std::fs::write(&path, "(jump: (impulse: 100.0))").unwrap();

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
        app.insert_resource(GameConfig::default());
        app.insert_resource(ConfigReloadSettings {
            paths: vec![path.clone()],
            interval_secs: 0.1,
        });
        app.insert_resource(ConfigOverrides {
            auto_close: Some(3.0),
            start_level: None,
        });
        app.add_plugins(ConfigHotReloadPlugin);

        // Force the recorded mtime into the past so the next poll sees a change.
        app.world_mut()
            .resource_mut::<ConfigReloadState>()
            .last_mod
            .insert(path.clone(), SystemTime::UNIX_EPOCH);

        for _ in 0..4 {
            app.update();
        }
        let cfg = app.world().resource::<GameConfig>();
        assert_eq!(cfg.jump.impulse, 100.0);
        assert_eq!(cfg.window.auto_close, 3.0);
    }
}
