use corpuskit_core::MeasurementSystem;
use corpuskit_settings::{Config, SettingsError};
use tempfile::TempDir;

fn custom_config() -> Config {
    let mut config = Config::new();
    config.layout.default_height = 850;
    config.layout.min_annotated_spacing_mm = 5.0;
    config.display.measurement_system = MeasurementSystem::Imperial;
    config
}

#[test]
fn test_toml_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corpus.toml");

    let config = custom_config();
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_json_save_and_load_in_new_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("corpus.json");

    let config = custom_config();
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.layout.default_height, 850);
    assert_eq!(loaded.display.measurement_system, MeasurementSystem::Imperial);
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{ "layout": { "thickness_bounds": { "min": 30, "max": 12 } } }"#,
    )
    .unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
}

#[test]
fn test_load_reports_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[layout\ndefault_height = ").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::TomlError(_)));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::LoadError(_)));
    assert!(err.to_string().contains("absent.toml"));
}
