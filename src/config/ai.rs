//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration (OpenRouter)
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenRouter API key
    pub openrouter_api_key: Option<String>,

    /// Model identifier to request
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Serve canned responses instead of calling the provider.
    /// Useful for local development without an API key.
    #[serde(default)]
    pub use_mock: bool,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.openrouter_api_key
            .as_ref()
            .is_some_and(|k| !k.is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.use_mock && !self.has_api_key() {
            return Err(ValidationError::MissingRequired("OPENROUTER_API_KEY"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openrouter_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            use_mock: false,
        }
    }
}

fn default_model() -> String {
    "deepseek/deepseek-r1-0528:free".to_string()
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_timeout() -> u64 {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "deepseek/deepseek-r1-0528:free");
        assert_eq!(config.timeout_secs, 120);
        assert!(!config.use_mock);
    }

    #[test]
    fn test_validation_missing_key() {
        let config = AiConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mock_needs_no_key() {
        let config = AiConfig {
            use_mock: true,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_valid_config() {
        let config = AiConfig {
            openrouter_api_key: Some("sk-or-xxx".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.has_api_key());
    }
}
