//! Runtime settings, read from the environment (and an optional `.env` file).

use bon::Builder;
use log::debug;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DATA_FILE: &str = "data/climate_data.csv";
pub const DEFAULT_GROK_BASE_URL: &str = "https://api.x.ai/v1";
pub const DEFAULT_GROK_MODEL: &str = "grok-4-1-fast-non-reasoning";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

/// Settings for the store and the optional LLM add-on.
///
/// ```
/// use climate_stats::Settings;
///
/// let settings = Settings::builder().data_file_path("fixtures/small.csv").build();
/// assert_eq!(settings.environment, "development");
/// assert!(!settings.llm_configured());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Settings {
    #[builder(into, default = PathBuf::from(DEFAULT_DATA_FILE))]
    pub data_file_path: PathBuf,
    #[builder(into, default = "development".to_string())]
    pub environment: String,
    /// Empty means the LLM add-on is not configured.
    #[builder(into, default)]
    pub grok_api_key: String,
    #[builder(into, default = DEFAULT_GROK_BASE_URL.to_string())]
    pub grok_base_url: String,
    #[builder(into, default = DEFAULT_GROK_MODEL.to_string())]
    pub grok_base_model: String,
    #[builder(default = Duration::from_secs(60))]
    pub grok_timeout: Duration,
    /// Station id to display name.
    #[builder(default)]
    pub station_names: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::builder().build()
    }
}

impl Settings {
    /// Reads settings from the process environment after loading `.env` if present.
    ///
    /// Recognised variables: `DATA_FILE_PATH`, `ENVIRONMENT`, `GROK_API_KEY`,
    /// `GROK_BASE_URL`, `GROK_BASE_MODEL`, `GROK_TIMEOUT_SECS` and `STATION_NAMES`
    /// (a JSON object of id to name). Unset or empty variables keep their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] when `GROK_TIMEOUT_SECS` is not a whole number or
    /// `STATION_NAMES` is not a JSON object of strings.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_ok() {
            debug!("Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(path) = get("DATA_FILE_PATH") {
            settings.data_file_path = PathBuf::from(path);
        }
        if let Some(environment) = get("ENVIRONMENT") {
            settings.environment = environment;
        }
        if let Some(key) = get("GROK_API_KEY") {
            settings.grok_api_key = key;
        }
        if let Some(url) = get("GROK_BASE_URL") {
            settings.grok_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(model) = get("GROK_BASE_MODEL") {
            settings.grok_base_model = model;
        }
        if let Some(raw) = get("GROK_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "GROK_TIMEOUT_SECS".to_string(),
                    value: raw.clone(),
                })?;
            settings.grok_timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = get("STATION_NAMES") {
            settings.station_names =
                serde_json::from_str(&raw).map_err(|_| ConfigError::InvalidValue {
                    key: "STATION_NAMES".to_string(),
                    value: raw.clone(),
                })?;
        }
        Ok(settings)
    }

    pub fn llm_configured(&self) -> bool {
        !self.grok_api_key.is_empty()
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings.data_file_path, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(settings.grok_base_url, DEFAULT_GROK_BASE_URL);
        assert_eq!(settings.grok_base_model, DEFAULT_GROK_MODEL);
        assert_eq!(settings.grok_timeout, Duration::from_secs(60));
        assert!(settings.station_names.is_empty());
        assert!(!settings.is_production());
    }

    #[test]
    fn test_overrides_and_empty_values() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("DATA_FILE_PATH", "/srv/data.csv"),
            ("ENVIRONMENT", "production"),
            ("GROK_API_KEY", ""),
            ("GROK_BASE_URL", "http://localhost:8080/v1/"),
            ("GROK_TIMEOUT_SECS", "5"),
            ("STATION_NAMES", r#"{"66062": "Sydney"}"#),
        ]))
        .unwrap();

        assert_eq!(settings.data_file_path, PathBuf::from("/srv/data.csv"));
        assert!(settings.is_production());
        assert!(!settings.llm_configured());
        assert_eq!(settings.grok_base_url, "http://localhost:8080/v1");
        assert_eq!(settings.grok_timeout, Duration::from_secs(5));
        assert_eq!(settings.station_names["66062"], "Sydney");
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Settings::from_lookup(lookup_from(&[("GROK_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == "GROK_TIMEOUT_SECS"));
    }
}
