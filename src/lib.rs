pub mod builder;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod screens;
pub mod selection;
pub mod theme;

// UniFFI bindings for mobile platforms
pub mod uniffi_bindings;

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

pub use builder::RecipeClientBuilder;
pub use client::{RecipeApi, SpoonacularClient};
pub use config::ApiConfig;
pub use controller::{
    DetailsController, Endpoint, Phase, RecipeInformation, RequestController, RequestState,
    SearchByIngredients, SearchController, Ticket, DETAILS_FAILED_MESSAGE,
    SEARCH_FAILED_MESSAGE,
};
pub use error::RecipeError;
pub use model::{strip_markup, RecipeDetails, RecipeSummary};
pub use screens::{DetailPanel, DetailsScreen, SearchScreen};
pub use selection::IngredientSelection;
pub use theme::{theme, Theme};

use log::debug;

/// Build a client from `recipe-finder.toml` and `RECIPE_FINDER__*` variables
pub fn client_from_config() -> Result<SpoonacularClient, RecipeError> {
    let config = ApiConfig::load()?;
    debug!("using recipe API at {}", config.base_url);
    SpoonacularClient::builder().config(&config).build()
}

/// Search recipes for a comma-separated ingredient list
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = recipe_finder::search_recipes("chicken, tomato").await?;
/// for recipe in recipes {
///     println!("{} {}", recipe.id, recipe.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(ingredients: &str) -> Result<Vec<RecipeSummary>, RecipeError> {
    let mut selection = IngredientSelection::new();
    selection.set_from_text(ingredients);
    if selection.tokens().is_empty() {
        return Err(RecipeError::InvalidInput(
            "ingredient list cannot be empty".to_string(),
        ));
    }

    let client = client_from_config()?;
    client.complex_search(&selection.query()).await
}

/// Fetch one recipe with ingredients, instructions and metadata
pub async fn fetch_recipe_details(id: u64) -> Result<RecipeDetails, RecipeError> {
    let client = client_from_config()?;
    client.recipe_information(id).await
}
