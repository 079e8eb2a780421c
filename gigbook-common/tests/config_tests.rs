//! Tests for configuration loading and priority resolution
//!
//! Tests that point the platform config directory somewhere else through
//! `XDG_CONFIG_HOME` are marked `#[serial]` so they never race each other.

use gigbook_common::config::{AppConfig, ConfigOverrides, TomlConfig};
use gigbook_common::Error;
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

fn write_config(dir: &std::path::Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let toml = TomlConfig::load_or_default(Some(&dir.path().join("absent.toml"))).unwrap();

    assert!(toml.port.is_none());
    assert!(toml.csrf.enabled);
}

#[test]
fn test_unparsable_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "port = [not toml");

    let err = TomlConfig::load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_file_values_sit_between_overrides_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
        database_path = "/srv/gigbook/data.db"
        port = 8000
        secret_key = "file-key"

        [csrf]
        time_limit_secs = 120
        "#,
    );
    let toml = TomlConfig::load_or_default(Some(&path)).unwrap();

    let overrides = ConfigOverrides {
        database_path: Some(PathBuf::from("/tmp/override.db")),
        ..Default::default()
    };
    let config = AppConfig::resolve(overrides, toml);

    assert_eq!(config.database_path, PathBuf::from("/tmp/override.db"));
    assert_eq!(config.port, 8000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.secret_key, "file-key");
    assert_eq!(config.csrf_time_limit, Duration::from_secs(120));
}

#[test]
#[serial]
fn test_default_location_is_read_when_no_path_given() {
    let dir = tempfile::tempdir().unwrap();
    let app_dir = dir.path().join("gigbook");
    std::fs::create_dir_all(&app_dir).unwrap();
    write_config(&app_dir, "host = \"0.0.0.0\"\n");

    let previous = std::env::var_os("XDG_CONFIG_HOME");
    std::env::set_var("XDG_CONFIG_HOME", dir.path());
    let toml = TomlConfig::load_or_default(None);
    match previous {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }

    #[cfg(target_os = "linux")]
    assert_eq!(toml.unwrap().host.as_deref(), Some("0.0.0.0"));
    #[cfg(not(target_os = "linux"))]
    assert!(toml.is_ok());
}

#[test]
#[serial]
fn test_missing_default_location_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let previous = std::env::var_os("XDG_CONFIG_HOME");
    std::env::set_var("XDG_CONFIG_HOME", dir.path());
    let toml = TomlConfig::load_or_default(None);
    match previous {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }

    assert!(toml.is_ok());
}
