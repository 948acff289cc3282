//! UniFFI bindings for recipe-finder
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::{
    ApiConfig, IngredientSelection, RecipeApi, RecipeDetails, RecipeError, RecipeSummary,
    SpoonacularClient,
};

/// FFI-compatible search result row
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeSummary {
    pub id: u64,
    pub title: String,
    /// Image URL (empty string if none)
    pub image: String,
}

impl From<RecipeSummary> for FfiRecipeSummary {
    fn from(summary: RecipeSummary) -> Self {
        FfiRecipeSummary {
            id: summary.id,
            title: summary.title,
            image: summary.image.unwrap_or_default(),
        }
    }
}

/// FFI-compatible recipe details, flattened for display
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeDetails {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub total_minutes: u32,
    pub servings: Option<u32>,
    pub health_score: Option<f64>,
    /// Formatted as "$1.23"
    pub cost_per_serving: Option<String>,
    /// One human-readable line per ingredient
    pub ingredients: Vec<String>,
    /// Instructions with markup removed
    pub instructions: Option<String>,
    pub diets: Vec<String>,
    pub occasions: Vec<String>,
}

impl From<RecipeDetails> for FfiRecipeDetails {
    fn from(details: RecipeDetails) -> Self {
        FfiRecipeDetails {
            total_minutes: details.total_minutes(),
            cost_per_serving: details.cost_per_serving(),
            ingredients: details
                .ingredient_lines()
                .into_iter()
                .map(String::from)
                .collect(),
            instructions: details.clean_instructions(),
            id: details.id,
            title: details.title,
            image: details.image.unwrap_or_default(),
            servings: details.servings,
            health_score: details.health_score,
            diets: details.diets,
            occasions: details.occasions,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiRecipeError {
    /// Network failure, non-2xx status or malformed payload
    RequestError { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration error, including a missing API key
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiRecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiRecipeError::RequestError { message } => write!(f, "Request error: {}", message),
            FfiRecipeError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiRecipeError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiRecipeError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiRecipeError {}

impl From<RecipeError> for FfiRecipeError {
    fn from(err: RecipeError) -> Self {
        let message = err.to_string();
        match err {
            RecipeError::Http(_) | RecipeError::Status { .. } | RecipeError::Payload(_) => {
                FfiRecipeError::RequestError { message }
            }
            RecipeError::InvalidInput(_) | RecipeError::NothingToRetry => {
                FfiRecipeError::InvalidInput { message }
            }
            RecipeError::MissingApiKey
            | RecipeError::HeaderError(_)
            | RecipeError::ConfigError(_) => FfiRecipeError::ConfigError { message },
        }
    }
}

/// Client settings passed from the host app
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiClientConfig {
    /// Optional API key (uses configuration or environment if not specified)
    pub api_key: Option<String>,
    /// Optional base URL (uses the public API if not specified)
    pub base_url: Option<String>,
    /// Optional timeout in seconds (uses default if not specified)
    pub timeout_seconds: Option<u64>,
}

/// FFI-compatible theme colors
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiThemeColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub error: String,
    pub success: String,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiRecipeError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiRecipeError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn build_client(config: Option<FfiClientConfig>) -> Result<SpoonacularClient, RecipeError> {
    let config = config.unwrap_or_default();
    let defaults = ApiConfig::load().unwrap_or_default();

    let mut builder = SpoonacularClient::builder().config(&defaults);

    if let Some(api_key) = config.api_key {
        builder = builder.api_key(api_key);
    }

    if let Some(base_url) = config.base_url {
        builder = builder.base_url(base_url);
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    builder.build()
}

/// Search recipes that use the given comma-separated ingredients
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_recipes(
    ingredients: String,
    config: Option<FfiClientConfig>,
) -> Result<Vec<FfiRecipeSummary>, FfiRecipeError> {
    let mut selection = IngredientSelection::new();
    selection.set_from_text(ingredients);
    if selection.tokens().is_empty() {
        return Err(FfiRecipeError::InvalidInput {
            message: "ingredient list cannot be empty".to_string(),
        });
    }

    let client = build_client(config)?;
    let rt = create_runtime()?;
    let results = rt.block_on(client.complex_search(&selection.query()))?;
    Ok(results.into_iter().map(Into::into).collect())
}

/// Load the full record of one recipe
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_recipe_details(
    id: u64,
    config: Option<FfiClientConfig>,
) -> Result<FfiRecipeDetails, FfiRecipeError> {
    let client = build_client(config)?;
    let rt = create_runtime()?;
    let details = rt.block_on(client.recipe_information(id))?;
    Ok(details.into())
}

/// Remove HTML tags from API-provided text
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn strip_markup(text: String) -> String {
    crate::strip_markup(&text)
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_theme_colors() -> FfiThemeColors {
    let colors = crate::theme().colors;
    FfiThemeColors {
        primary: colors.primary.to_string(),
        secondary: colors.secondary.to_string(),
        background: colors.background.to_string(),
        surface: colors.surface.to_string(),
        text_primary: colors.text_primary.to_string(),
        text_secondary: colors.text_secondary.to_string(),
        error: colors.error.to_string(),
        success: colors.success.to_string(),
    }
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Ingredient form state shared with the host UI
#[derive(Debug, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct FfiIngredientSelection {
    inner: Mutex<IngredientSelection>,
}

impl FfiIngredientSelection {
    fn lock(&self) -> MutexGuard<'_, IngredientSelection> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl FfiIngredientSelection {
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_from_text(&self, text: String) {
        self.lock().set_from_text(text);
    }

    pub fn add_token(&self, token: String) {
        self.lock().add_token(token);
    }

    pub fn remove_token(&self, token: String) {
        self.lock().remove_token(&token);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn is_submittable(&self) -> bool {
        self.lock().is_submittable()
    }

    pub fn raw_text(&self) -> String {
        self.lock().raw_text().to_string()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.lock().tokens().to_vec()
    }

    pub fn query(&self) -> String {
        self.lock().query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_details_conversion() {
        let details: RecipeDetails = serde_json::from_str(
            r#"{
                "id": 42,
                "title": "Tomato Soup",
                "preparationMinutes": 10,
                "cookingMinutes": 25,
                "pricePerServing": 250,
                "extendedIngredients": [{"original": "4 tomatoes"}],
                "instructions": "<p>Simmer.</p>",
                "diets": ["vegan"]
            }"#,
        )
        .unwrap();

        let ffi: FfiRecipeDetails = details.into();
        assert_eq!(ffi.id, 42);
        assert_eq!(ffi.total_minutes, 35);
        assert_eq!(ffi.cost_per_serving.as_deref(), Some("$2.50"));
        assert_eq!(ffi.ingredients, vec!["4 tomatoes".to_string()]);
        assert_eq!(ffi.instructions.as_deref(), Some("Simmer."));
        assert_eq!(ffi.diets, vec!["vegan".to_string()]);
        assert!(ffi.image.is_empty());
    }

    #[test]
    fn test_error_mapping() {
        let err: FfiRecipeError = RecipeError::MissingApiKey.into();
        assert!(matches!(err, FfiRecipeError::ConfigError { .. }));

        let err: FfiRecipeError = RecipeError::Status {
            endpoint: "/recipes/1/information".to_string(),
            status: 404,
        }
        .into();
        assert!(matches!(err, FfiRecipeError::RequestError { .. }));
    }

    #[test]
    fn test_empty_search_is_rejected() {
        let result = search_recipes(" , ".to_string(), None);
        assert!(matches!(result, Err(FfiRecipeError::InvalidInput { .. })));
    }

    #[test]
    fn test_selection_object() {
        let selection = FfiIngredientSelection::new();
        selection.add_token("garlic".to_string());
        selection.add_token("garlic".to_string());
        selection.add_token("onion".to_string());
        assert_eq!(selection.raw_text(), "garlic, onion");
        assert_eq!(selection.query(), "garlic,onion");

        selection.remove_token("garlic".to_string());
        assert_eq!(selection.tokens(), vec!["onion".to_string()]);

        selection.clear();
        assert!(!selection.is_submittable());
    }

    #[test]
    fn test_get_version() {
        assert!(!get_version().is_empty());
        assert_eq!(get_theme_colors().primary, "#4CAF50");
        assert_eq!(strip_markup("<b>hi</b>".to_string()), "hi");
    }
}
