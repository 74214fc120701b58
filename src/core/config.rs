use std::time::Duration;

use reqwest::Url;
use serde::{
    Deserialize,
    Serialize,
};

use super::{
    state::SubmitPolicy,
    ClientError,
};
use crate::persistence::{
    load_json_or_default,
    save_json,
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const API_URL_ENV: &str = "SYMPTOM_PREDICTOR_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub submit_policy: SubmitPolicy,
    pub max_results: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 10,
            submit_policy: SubmitPolicy::default(),
            max_results: 3,
        }
    }
}

impl ClientConfig {
    /// Saved settings, with the API URL environment override applied on top.
    /// Invalid settings fall back to the defaults.
    pub fn load() -> Self {
        let mut config = load_json_or_default::<ClientConfig>(SETTINGS_FILE);
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_url_override(&url);
        }

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!("{}. Using default settings.", e);
                ClientConfig::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), ClientError> {
        self.validate()?;
        save_json(self, SETTINGS_FILE)
    }

    fn apply_url_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            tracing::info!("Using API URL from {}: {}", API_URL_ENV, url);
            self.api_base_url = url.to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        let url = Url::parse(self.api_base_url.trim()).map_err(|e| {
            ClientError::Config(format!("invalid API URL {:?}: {}", self.api_base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "API URL must use http or https, got {}",
                url.scheme()
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ClientError::Config("request timeout must be at least 1 second".into()));
        }
        if self.max_results == 0 {
            return Err(ClientError::Config("must show at least one result".into()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `<base>/<path>`, tolerating a trailing slash on the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url.trim().trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.submit_policy, SubmitPolicy::DisableWhilePending);
    }

    #[test]
    fn test_endpoint_joining() {
        let mut config = ClientConfig::default();
        config.api_base_url = "https://example.org/api/".to_string();
        assert_eq!(config.endpoint("symptoms"), "https://example.org/api/symptoms");
        assert_eq!(config.endpoint("/predict"), "https://example.org/api/predict");
    }

    #[test]
    fn test_validation_errors() {
        let mut config = ClientConfig::default();
        config.api_base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));

        config.api_base_url = "ftp://example.org".to_string();
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));

        let mut config = ClientConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.max_results = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "submit_policy": "cancel_previous" }"#).unwrap();
        assert_eq!(config.submit_policy, SubmitPolicy::CancelPrevious);
        assert_eq!(config.max_results, 3);
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_url_override() {
        let mut config = ClientConfig::default();
        config.apply_url_override("  ");
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
        config.apply_url_override(" https://predict.example.org ");
        assert_eq!(config.api_base_url, "https://predict.example.org");
    }
}
