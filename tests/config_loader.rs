mod common;

use common::temp_config;
use yac::config::{Config, ConfigError};

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://localhost:3001");
    assert_eq!(config.api.user_path, "/user");
    assert_eq!(config.api.message_path, "/message");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);

    assert_eq!(
        config.identity.base_url,
        "https://identitytoolkit.googleapis.com"
    );
    assert_eq!(config.identity.request_uri, "http://localhost");
    assert!(!config.coordinator.log_actions);
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("yac/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.api, Config::default().api);
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://chat.example.com"

[coordinator]
log_actions = true
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://chat.example.com");
    assert_eq!(config.api.user_path, "/user");
    assert!(config.coordinator.log_actions);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_invalid_values_fail_validation() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "ftp://chat.example.com"
"#,
    );

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("api.base_url"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_zero_timeout_fails_validation() {
    let (_dir, path) = temp_config(
        r#"
[identity]
timeout_seconds = 0
"#,
    );

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
