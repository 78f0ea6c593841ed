use glow_base::Vec2;
use log::LevelFilter;
use tvglow::{AppConfig, ConfigError};

#[test]
fn test_empty_object_is_all_defaults() {
    let config = AppConfig::from_json("{}").unwrap();
    assert!(config.log_level.is_none());
    assert!(config.log_dir.is_none());
    assert_eq!(config.camera.device(), "/dev/video0");
    assert_eq!(config.pipeline.rectified_size(), Vec2::new(256, 144));
    assert_eq!(config.level().unwrap(), glow_base::default_level());
}

#[test]
fn test_nested_sections() {
    let json = r#"{
        "log_level": "warn",
        "camera": { "device": "/dev/video2", "width": 640, "height": 360, "exposure": null },
        "pipeline": { "zone_rows": 1, "zone_cols": 8, "window_ms": 150.0 }
    }"#;
    let config = AppConfig::from_json(json).unwrap();
    assert_eq!(config.level().unwrap(), LevelFilter::Warn);
    assert_eq!(config.camera.device(), "/dev/video2");
    assert_eq!((config.camera.width(), config.camera.height()), (640, 360));
    assert_eq!(config.camera.exposure(), None);
    assert_eq!(config.camera.fps(), 30);
    assert_eq!(config.pipeline.zone_rows(), 1);
    assert_eq!(config.pipeline.zone_cols(), 8);
    assert_eq!(config.pipeline.window_ms(), 150.0);
    config.pipeline.validate().unwrap();
}

#[test]
fn test_level_is_case_insensitive() {
    let config = AppConfig::from_json(r#"{ "log_level": "DEBUG" }"#).unwrap();
    assert_eq!(config.level().unwrap(), LevelFilter::Debug);
}

#[test]
fn test_unknown_level() {
    let config = AppConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap();
    match config.level() {
        Err(ConfigError::InvalidLevel(level)) => assert_eq!(level, "loud"),
        other => panic!("expected InvalidLevel, got {other:?}"),
    }
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        AppConfig::from_json("{ not json"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        AppConfig::load("/nonexistent/tvglow.json"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("tvglow-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "pipeline": { "zone_rows": 2 } }"#).unwrap();
    let config = AppConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.pipeline.zone_rows(), 2);
}
