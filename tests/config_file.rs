use std::fs;
use std::path::PathBuf;

use corridor_jumper::core::config::GameConfig;
use corridor_jumper::core::level::resolve_level;

fn shipped_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/config/game.ron")
}

#[test]
fn shipped_config_matches_builtin_defaults() {
    let cfg = GameConfig::load_from_file(shipped_config()).expect("shipped game.ron parses");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}

#[test]
fn extra_layer_overrides_shipped_config() {
    let dir = tempfile::tempdir().unwrap();
    let extra = dir.path().join("harder.ron");
    fs::write(
        &extra,
        r#"(
            physics: (gravity_y: -500.0),
            jump: (key: "Space"),
            start_level: 2,
        )"#,
    )
    .unwrap();

    let (cfg, used, errors) = GameConfig::load_layered([shipped_config(), extra]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.physics.gravity_y, -500.0);
    assert_eq!(cfg.physics.step_hz, 60.0);
    assert_eq!(cfg.jump.key, "Space");
    assert_eq!(cfg.jump.impulse, 180.0);
    assert_eq!(cfg.start_level, 2);
    assert_eq!(cfg.levels.len(), 3);
}

#[test]
fn replacing_the_level_list_drops_builtin_levels() {
    let dir = tempfile::tempdir().unwrap();
    let extra = dir.path().join("one_level.ron");
    fs::write(
        &extra,
        r#"(levels: [(id: "tight", name: "Tight", band: (top: 250.0, bottom: 250.0))])"#,
    )
    .unwrap();

    let (cfg, _used, errors) = GameConfig::load_layered([shipped_config(), extra]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(cfg.levels.len(), 1);
    assert_eq!(cfg.levels[0].background, "");
    assert_eq!(resolve_level(&cfg.levels, "tight"), Some(0));
    assert_eq!(resolve_level(&cfg.levels, "meadow"), None);
}

#[test]
fn broken_layer_is_reported_and_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.ron");
    fs::write(&broken, "(window: (width: ").unwrap();

    let (cfg, used, errors) = GameConfig::load_layered([shipped_config(), broken]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("parse error"), "{errors:?}");
    assert_eq!(cfg.window.width, 800.0);
}
