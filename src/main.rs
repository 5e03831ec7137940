// This file is part of Corridor Jumper.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;

use corridor_jumper::core::level::resolve_level;
use corridor_jumper::interaction::session::config_hot_reload::{
    ConfigOverrides, ConfigReloadSettings,
};
use corridor_jumper::{GameConfig, GamePlugin};

const BASE_CONFIG: &str = "assets/config/game.ron";
const LOCAL_CONFIG: &str = "assets/config/game.local.ron";

#[derive(Parser, Debug)]
#[command(author, version, about = "Keep the circle inside the corridor and reach the right edge", long_about = None)]
struct Cli {
    /// Extra RON layer merged over game.ron / game.local.ron
    #[arg(long)]
    config: Option<PathBuf>,
    /// Level to start on: 1-based number or level id
    #[arg(long)]
    level: Option<String>,
    /// Exit after this many seconds (0 = never)
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() {
    let cli = Cli::parse();

    let mut paths = vec![PathBuf::from(BASE_CONFIG)];
    if std::path::Path::new(LOCAL_CONFIG).exists() {
        paths.push(PathBuf::from(LOCAL_CONFIG));
    }
    if let Some(extra) = &cli.config {
        paths.push(extra.clone());
    }
    let (mut cfg, used, mut notes) = GameConfig::load_layered(&paths);

    let mut overrides = ConfigOverrides {
        auto_close: cli.auto_close,
        start_level: None,
    };
    if let Some(sel) = cli.level.as_deref() {
        match resolve_level(&cfg.effective_levels(), sel) {
            Some(index) => overrides.start_level = Some(index),
            None => notes.push(format!("--level '{sel}' matches no level; starting at level 1")),
        }
    }
    overrides.apply(&mut cfg);
    notes.extend(cfg.validate());

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(overrides)
        .insert_resource(ConfigReloadSettings {
            paths,
            ..default()
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: cfg.window.title.clone(),
                        resolution: (cfg.window.width, cfg.window.height).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "info,wgpu=error,naga=warn,bevy_render=warn".into(),
                    ..default()
                }),
        )
        .add_plugins(GamePlugin)
        .add_systems(Startup, move || {
            // LogPlugin is only live once the app runs.
            info!(target: "config", "Config layers: {:?}", used);
            for note in &notes {
                warn!(target: "config", "{note}");
            }
        })
        .run();
}
