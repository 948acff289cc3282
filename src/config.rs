use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Connection settings for the recipe API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key sent as `x-api-key` (can also be set via SPOONACULAR_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds, applied uniformly to every request
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl ApiConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// The configured key, or the SPOONACULAR_API_KEY environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<ApiConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-finder").required(false))
        // Use double underscore for nested keys: RECIPE_FINDER__TIMEOUT
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://api.spoonacular.com");
        assert_eq!(config.timeout, 10);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "api_key = \"abc123\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: ApiConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.timeout, 10);
        assert_eq!(config.base_url, "https://api.spoonacular.com");
    }

    #[test]
    fn test_configured_key_wins() {
        let config = ApiConfig {
            api_key: Some("from-config".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("from-config"));
    }

    #[test]
    fn test_load_config_without_file() {
        // Every field has a default, so loading without a file must succeed
        let result = load_config();
        assert!(result.is_ok());
    }
}
