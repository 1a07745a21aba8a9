//! Config file persistence.

use campus_admin::config::{AppConfig, ConfigLoadResult};

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.api.base_url = "https://api.campus.example/api".to_string();
    config.api.token = Some("abc123".to_string());
    config.ui.dark_mode = false;
    config.save(&path).unwrap();

    match AppConfig::try_load(&path) {
        ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded, config),
        other => panic!("expected loaded config, got {other:?}"),
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = AppConfig::try_load(&dir.path().join("config.toml"));
    assert!(matches!(result, ConfigLoadResult::Missing));
}

#[test]
fn test_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    std::fs::write(&path, "this is not toml [").unwrap();
    assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Invalid(_)));

    std::fs::write(&path, "[api]\nbase_url = \"ftp://nope\"\n").unwrap();
    assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Invalid(_)));
}
