use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;

use crate::client::SpoonacularClient;
use crate::config::ApiConfig;
use crate::RecipeError;

const API_KEY_HEADER: &str = "x-api-key";

/// Builder for configuring a [`SpoonacularClient`]
///
/// Unset values fall back to [`ApiConfig::default`]; the API key falls back to
/// the `SPOONACULAR_API_KEY` environment variable.
#[derive(Debug, Default)]
pub struct RecipeClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeClientBuilder {
    /// Start from loaded configuration
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{ApiConfig, SpoonacularClient};
    ///
    /// let config = ApiConfig {
    ///     api_key: Some("demo-key".to_string()),
    ///     ..Default::default()
    /// };
    /// let client = SpoonacularClient::builder().config(&config).build();
    /// assert!(client.is_ok());
    /// ```
    pub fn config(mut self, config: &ApiConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.api_key = config.resolve_api_key();
        self.timeout = Some(Duration::from_secs(config.timeout));
        self
    }

    /// Override the API host, e.g. to point at a local mock server
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key sent with every request
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_finder::SpoonacularClient;
    /// use std::time::Duration;
    ///
    /// let builder = SpoonacularClient::builder()
    ///     .api_key("demo-key")
    ///     .timeout(Duration::from_secs(5));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `RecipeError` if:
    /// - No API key was given and none is set in the environment
    /// - The key is not a valid header value
    /// - The underlying HTTP client cannot be created
    pub fn build(self) -> Result<SpoonacularClient, RecipeError> {
        let defaults = ApiConfig::default();

        let api_key = self
            .api_key
            .or_else(|| defaults.resolve_api_key())
            .ok_or(RecipeError::MissingApiKey)?;

        let mut headers = HeaderMap::new();
        let mut key_value = HeaderValue::from_str(&api_key)?;
        key_value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key_value);

        let client = Client::builder()
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(defaults.timeout)),
            )
            .default_headers(headers)
            .build()?;

        Ok(SpoonacularClient::from_parts(
            client,
            self.base_url.unwrap_or(defaults.base_url),
        ))
    }
}
