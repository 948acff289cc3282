use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::builder::RecipeClientBuilder;
use crate::model::{RecipeDetails, RecipeSummary, SearchResponse};
use crate::RecipeError;

pub const COMPLEX_SEARCH_PATH: &str = "/recipes/complexSearch";

/// Read-only access to the remote recipe catalogue
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// `GET /recipes/complexSearch?includeIngredients=...`
    async fn complex_search(
        &self,
        include_ingredients: &str,
    ) -> Result<Vec<RecipeSummary>, RecipeError>;

    /// `GET /recipes/{id}/information`
    async fn recipe_information(&self, id: u64) -> Result<RecipeDetails, RecipeError>;
}

/// reqwest-backed client for the Spoonacular recipe API
pub struct SpoonacularClient {
    client: Client,
    base_url: String,
}

impl SpoonacularClient {
    pub fn builder() -> RecipeClientBuilder {
        RecipeClientBuilder::default()
    }

    pub(crate) fn from_parts(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RecipeError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RecipeError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeApi for SpoonacularClient {
    async fn complex_search(
        &self,
        include_ingredients: &str,
    ) -> Result<Vec<RecipeSummary>, RecipeError> {
        let response: SearchResponse = self
            .get_json(
                COMPLEX_SEARCH_PATH,
                &[("includeIngredients", include_ingredients)],
            )
            .await?;
        debug!(
            "complexSearch returned {} of {:?} results",
            response.results.len(),
            response.total_results
        );
        Ok(response.results)
    }

    async fn recipe_information(&self, id: u64) -> Result<RecipeDetails, RecipeError> {
        self.get_json(&format!("/recipes/{}/information", id), &[])
            .await
    }
}
