//! Client configuration

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::{API_URL, DEFAULT_TIMEOUT_SECS};
use crate::SdkError;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL prefixed to every endpoint path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Default config pointing at another base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Parse a config from TOML text; missing fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, SdkError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SdkError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SdkError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Parse the base URL.
    ///
    /// The returned URL always ends with `/` so endpoint paths join onto it
    /// instead of replacing its path.
    pub fn parsed_base_url(&self) -> Result<Url, SdkError> {
        let mut url = Url::parse(self.base_url.trim())
            .map_err(|e| SdkError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().map_or(true, str::is_empty) {
            return Err(SdkError::InvalidUrl(self.base_url.clone()));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Check the base URL and timeout
    pub fn validate(&self) -> Result<(), SdkError> {
        self.parsed_base_url()?;
        if self.timeout_secs == 0 {
            return Err(SdkError::Config("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, API_URL);
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_toml() {
        let config = ClientConfig::from_toml_str(r#"base_url = "http://localhost:3000/""#).unwrap();
        assert_eq!(config.base_url(), "http://localhost:3000");
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn test_config_full_toml() {
        let toml = r#"
            base_url = "https://staging.example.com/api"
            timeout_secs = 5
        "#;
        let config = ClientConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.base_url(), "https://staging.example.com/api");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_rejects_bad_url() {
        let result = ClientConfig::from_toml_str(r#"base_url = "ftp://example.com""#);
        assert!(matches!(result, Err(SdkError::InvalidUrl(_))));

        let result = ClientConfig::with_base_url("https://").validate();
        assert!(matches!(result, Err(SdkError::InvalidUrl(_))));
    }

    #[test]
    fn test_config_rejects_unparseable_urls() {
        for base_url in ["http://[::1", "http://host:99999", "https://exa mple.com", "mailto:ops@example.com"] {
            let result = ClientConfig::with_base_url(base_url).validate();
            assert!(
                matches!(result, Err(SdkError::InvalidUrl(_))),
                "{} accepted: {:?}",
                base_url,
                result
            );
        }
    }

    #[test]
    fn test_parsed_base_url_keeps_path() {
        let url = ClientConfig::with_base_url("https://example.com/api/v1").parsed_base_url().unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v1/");
        assert_eq!(
            url.join("token/swap").unwrap().as_str(),
            "https://example.com/api/v1/token/swap"
        );

        let url = ClientConfig::default().parsed_base_url().unwrap();
        assert!(url.as_str().starts_with(API_URL));
    }

    #[test]
    fn test_config_rejects_zero_timeout() {
        let result = ClientConfig::from_toml_str("timeout_secs = 0");
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn test_config_invalid_toml() {
        let result = ClientConfig::from_toml_str("timeout_secs = \"soon\"");
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 30").unwrap();
        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.base_url, API_URL);
    }

    #[test]
    fn test_config_load_missing_file() {
        let result = ClientConfig::load("/nonexistent/cdp-sdk.toml");
        assert!(matches!(result, Err(SdkError::Config(_))));
    }
}
