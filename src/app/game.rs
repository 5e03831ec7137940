// This file is part of Corridor Jumper.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::audio::GameAudioPlugin;
use crate::core::assets::OptionalAssetsPlugin;
use crate::core::config::GameConfig;
use crate::core::events::GameEventsPlugin;
use crate::core::level::LevelPlugin;
use crate::debug::DebugPlugin;
use crate::gameplay::GameplayPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::physics::PhysicsSetupPlugin;
use crate::rendering::RenderingPlugin;
use crate::ui::OverlayPlugin;

/// Everything the windowed game needs on top of `DefaultPlugins`.
/// Expects `GameConfig` to be inserted before it is added.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            warn!(target: "config", "GameConfig missing at plugin build; using defaults");
            app.insert_resource(GameConfig::default());
        }
        app.init_state::<AppState>()
            .add_plugins((GameEventsPlugin, OptionalAssetsPlugin, LevelPlugin))
            .add_plugins((
                PhysicsSetupPlugin,
                GameplayPlugin,
                RenderingPlugin,
                OverlayPlugin,
                GameAudioPlugin,
                ConfigHotReloadPlugin,
                AutoClosePlugin,
                DebugPlugin,
            ));
    }
}
