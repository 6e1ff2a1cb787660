//! Configuration from files and the environment.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::json;
use tempfile::NamedTempFile;

use weather_admin::client::ApiClient;
use weather_admin::config::loader::{from_env, ENV_BASE_URL, ENV_TIMEOUT_MS};
use weather_admin::config::{load_config, ConfigError};

mod common;
use common::RecordingNotifier;

// Tests in this file read process-wide environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// The file is removed when the handle drops, even if the test panics.
fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("weather-admin-")
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_config_from_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let file = write_temp(
        r#"
        [client]
        base_address = "https://weather.example.com/api"
        timeout_ms = 2500

        [observability]
        log_level = "debug"
        metrics_enabled = false
        "#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.client.base_address, "https://weather.example.com/api");
    assert_eq!(config.client.timeout_ms, 2500);
    assert_eq!(config.observability.log_level, "debug");
    assert!(!config.observability.metrics_enabled);
}

#[test]
fn test_invalid_file_reports_all_problems() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let file = write_temp(
        r#"
        [client]
        base_address = "localhost"
        timeout_ms = 0
        "#,
    );

    let err = load_config(file.path()).unwrap_err();

    match err {
        ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
        other => panic!("expected validation error, got {}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_config(&PathBuf::from("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[tokio::test]
async fn test_environment_changes_do_not_reach_existing_client() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let backend = common::start_mock_backend(200, json!({"code": 200, "data": "first"})).await;

    std::env::set_var(ENV_BASE_URL, backend.base_address());
    std::env::set_var(ENV_TIMEOUT_MS, "1500");
    let config = from_env().unwrap();
    let api = ApiClient::new(config.client, RecordingNotifier::new()).unwrap();

    std::env::set_var(ENV_BASE_URL, "http://127.0.0.1:9/elsewhere");
    std::env::set_var(ENV_TIMEOUT_MS, "1");

    let value = api.get::<String>("/value").await;
    std::env::remove_var(ENV_BASE_URL);
    std::env::remove_var(ENV_TIMEOUT_MS);

    assert_eq!(value.unwrap(), "first");
    assert_eq!(api.config().base_address, backend.base_address());
    assert_eq!(api.config().timeout_ms, 1500);
}
