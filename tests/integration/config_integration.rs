//! Integration tests for layered configuration loading.

use api_telemetry::config::ConfigLoader;
use api_telemetry::telemetry::Telemetry;
use std::fs;
use tempfile::TempDir;

fn write_workspace_file(root: &std::path::Path, name: &str, content: &str) {
    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join(name), content).unwrap();
}

#[test]
fn test_load_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("telemetry.toml");
    fs::write(
        &path,
        r#"
[telemetry]
cache_size = 5

[logging]
level = "debug"
format = "json"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_file(&path).unwrap();
    assert_eq!(config.telemetry.cache_size, 5);
    assert!(!config.telemetry.disabled);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.output, "stderr");

    let telemetry = Telemetry::from_config(&config.telemetry).unwrap();
    assert_eq!(telemetry.threshold(), 5);
}

#[test]
fn test_load_file_missing_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ConfigLoader::load_file(&temp_dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
fn test_load_file_rejects_malformed_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("telemetry.toml");
    fs::write(&path, "[telemetry]\ncache_size = \"lots\"\n").unwrap();

    let err = ConfigLoader::load_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_workspace_environment_file_wins_over_base() {
    let temp_dir = TempDir::new().unwrap();
    write_workspace_file(
        temp_dir.path(),
        "config.toml",
        "[telemetry]\ncache_size = 8\ndisabled = true\n",
    );
    write_workspace_file(
        temp_dir.path(),
        "development.toml",
        "[telemetry]\ncache_size = 12\n",
    );

    let config = ConfigLoader::load(temp_dir.path()).unwrap();
    assert_eq!(config.telemetry.cache_size, 12);
    assert!(config.telemetry.disabled);
    assert!(Telemetry::from_config(&config.telemetry).is_none());
}

#[test]
fn test_load_validated_rejects_invalid_logging() {
    let temp_dir = TempDir::new().unwrap();
    write_workspace_file(
        temp_dir.path(),
        "config.toml",
        "[logging]\noutput = \"file\"\n",
    );

    let err = ConfigLoader::load_validated(temp_dir.path()).unwrap_err();
    assert!(err.to_string().contains("requires a file path"));
}
