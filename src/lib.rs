// This file is part of Corridor Jumper.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod audio;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;
pub mod ui;

// Curated re-exports
pub use app::{game::GamePlugin, state::AppState};
pub use core::components::{JumpState, Player, PlayerRadius};
pub use core::config::{GameConfig, WindowConfig};
pub use core::level::{BandContact, BoundaryBand, CurrentLevel, LevelConfig};
pub use core::playfield::Playfield;
