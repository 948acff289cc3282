use thiserror::Error;

/// Errors that can occur while searching for or loading recipes
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Transport-level failure (unreachable host, timeout, TLS, client setup)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The recipe API answered with a non-2xx status
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// The response body could not be decoded into the expected shape
    #[error("Malformed response payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The caller supplied an empty query or an unusable identifier
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Retry or refresh was requested before any request was issued
    #[error("Nothing to retry: no request has been issued yet")]
    NothingToRetry,

    /// No API key in configuration or environment
    #[error("API key not found in config or SPOONACULAR_API_KEY environment variable")]
    MissingApiKey,

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl RecipeError {
    /// True for failures where the server never produced a usable answer
    /// (connection refused, DNS, timeout). Used for diagnostics only.
    pub fn is_network_failure(&self) -> bool {
        match self {
            RecipeError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            _ => false,
        }
    }
}
