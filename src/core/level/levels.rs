use bevy::prelude::*;
use serde::Deserialize;

use super::band::BoundaryBand;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LevelConfig {
    pub id: String,
    pub name: String,
    pub band: BoundaryBand,
    /// Background image path relative to the asset root.
    #[serde(default)]
    pub background: String,
}

impl LevelConfig {
    pub fn new(id: &str, name: &str, band: BoundaryBand, background: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            band,
            background: background.into(),
        }
    }
}

/// The three built-in levels, tuned for an 800x600 playfield.
pub fn default_levels() -> Vec<LevelConfig> {
    vec![
        LevelConfig::new("meadow", "Meadow", BoundaryBand::new(190.0, 205.0), "images/level1.jpeg"),
        LevelConfig::new("canyon", "Canyon", BoundaryBand::new(170.0, 215.0), "images/level2.jpeg"),
        LevelConfig::new("needle", "Needle", BoundaryBand::new(240.0, 280.0), "images/level3.jpg"),
    ]
}

/// Resolve a level selector: a 1-based position ("2") or a level id ("canyon").
pub fn resolve_level(levels: &[LevelConfig], selector: &str) -> Option<usize> {
    let sel = selector.trim();
    if sel.is_empty() {
        return None;
    }
    if let Ok(n) = sel.parse::<usize>() {
        return (1..=levels.len()).contains(&n).then(|| n - 1);
    }
    levels.iter().position(|l| l.id == sel)
}

/// Active level list, rebuilt from `GameConfig` whenever it changes.
#[derive(Resource, Debug, Clone, Deref)]
pub struct LevelCatalog(pub Vec<LevelConfig>);

impl Default for LevelCatalog {
    fn default() -> Self {
        Self(default_levels())
    }
}

impl LevelCatalog {
    pub fn get(&self, index: usize) -> Option<&LevelConfig> {
        self.0.get(index)
    }
}
