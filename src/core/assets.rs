//! Optional asset loading: images and sounds that are absent on disk are logged once and
//! skipped so the game keeps running without them.

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;

/// Directory the `AssetServer` reads from, used to probe for files before loading.
/// Resolved the same way as bevy's file reader: `BEVY_ASSET_ROOT`, then
/// `CARGO_MANIFEST_DIR`, then the executable's directory.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AssetRoot(pub PathBuf);

impl Default for AssetRoot {
    fn default() -> Self {
        Self(FileAssetReader::get_base_path().join("assets"))
    }
}

impl AssetRoot {
    pub fn exists(&self, relative: &str) -> bool {
        self.0.join(relative).is_file()
    }
}

/// Paths already reported as missing.
#[derive(Resource, Debug, Default)]
pub struct MissingAssets {
    reported: HashSet<String>,
}

impl MissingAssets {
    /// Returns true the first time a path is noted.
    pub fn note(&mut self, relative: &str) -> bool {
        self.reported.insert(relative.to_owned())
    }
}

/// Load `relative` through the asset server if it exists under the root.
pub fn load_optional<A: Asset>(
    server: &AssetServer,
    root: &AssetRoot,
    missing: &mut MissingAssets,
    relative: &str,
    kind: &str,
) -> Option<Handle<A>> {
    let relative = relative.trim();
    if relative.is_empty() {
        return None;
    }
    if !root.exists(relative) {
        if missing.note(relative) {
            warn!(
                target: "assets",
                "{kind} '{}' not found under {}; continuing without it",
                relative,
                root.0.display()
            );
        }
        return None;
    }
    Some(server.load(relative.to_owned()))
}

pub struct OptionalAssetsPlugin;

impl Plugin for OptionalAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AssetRoot>().init_resource::<MissingAssets>();
    }
}
