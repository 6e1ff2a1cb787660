//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Overrides `client.base_address`.
pub const ENV_BASE_URL: &str = "WEATHER_API_BASE_URL";
/// Overrides `client.timeout_ms`.
pub const ENV_TIMEOUT_MS: &str = "WEATHER_API_TIMEOUT_MS";
/// Overrides `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "WEATHER_ADMIN_LOG";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load a TOML file, apply environment overrides, and validate.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: AppConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Defaults plus environment overrides, validated.
pub fn from_env() -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    apply_env_overrides(&mut config)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply the process environment on top of `config`.
pub fn apply_env_overrides(config: &mut AppConfig) -> Result<(), ConfigError> {
    apply_overrides_from(config, |var| std::env::var(var).ok())
}

/// Apply overrides from an arbitrary lookup. Empty values are ignored.
pub fn apply_overrides_from<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

    if let Some(base) = get(ENV_BASE_URL) {
        config.client.base_address = base.trim().to_string();
    }

    if let Some(raw) = get(ENV_TIMEOUT_MS) {
        config.client.timeout_ms = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            var: ENV_TIMEOUT_MS,
            value: raw.clone(),
        })?;
    }

    if let Some(level) = get(ENV_LOG_LEVEL) {
        config.observability.log_level = level.trim().to_string();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = AppConfig::default();
        apply_overrides_from(
            &mut config,
            lookup(&[
                (ENV_BASE_URL, "https://weather.example.com/api"),
                (ENV_TIMEOUT_MS, " 1200 "),
                (ENV_LOG_LEVEL, "debug"),
            ]),
        )
        .unwrap();

        assert_eq!(config.client.base_address, "https://weather.example.com/api");
        assert_eq!(config.client.timeout_ms, 1200);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let mut config = AppConfig::default();
        apply_overrides_from(&mut config, lookup(&[(ENV_BASE_URL, "  ")])).unwrap();
        assert_eq!(config.client.base_address, "http://localhost:8080/api");
    }

    #[test]
    fn test_malformed_timeout_is_rejected() {
        let mut config = AppConfig::default();
        let err = apply_overrides_from(&mut config, lookup(&[(ENV_TIMEOUT_MS, "soon")]))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_TIMEOUT_MS, .. }));
        assert_eq!(err.to_string(), "Invalid value for WEATHER_API_TIMEOUT_MS: 'soon'");
    }

    #[test]
    fn test_validation_error_lists_all_problems() {
        let err = ConfigError::Validation(vec![
            ValidationError::ZeroTimeout,
            ValidationError::UnknownLogLevel("loud".into()),
        ]);
        let text = err.to_string();
        assert!(text.starts_with("Validation failed: "));
        assert!(text.contains("timeout_ms"));
        assert!(text.contains("loud"));
    }
}
