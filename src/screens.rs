//! Screen-level glue: which selection is open, what was submitted, and which
//! panel of a recipe is showing.

use log::debug;

use crate::client::RecipeApi;
use crate::controller::{
    DetailsController, Endpoint, RequestState, SearchByIngredients, SearchController,
};
use crate::model::{RecipeDetails, RecipeSummary};
use crate::selection::IngredientSelection;
use crate::RecipeError;

/// Home screen: result list plus the ingredient form shown on demand
#[derive(Default)]
pub struct SearchScreen {
    form: Option<IngredientSelection>,
    submitted_query: Option<String>,
    search: SearchController,
}

impl SearchScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the ingredient form with an empty selection
    pub fn open_form(&mut self) -> &mut IngredientSelection {
        self.form.insert(IngredientSelection::new())
    }

    /// Close the form without searching. The selection is discarded.
    pub fn dismiss_form(&mut self) {
        self.form = None;
    }

    pub fn form(&self) -> Option<&IngredientSelection> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut IngredientSelection> {
        self.form.as_mut()
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    /// Query of the last submitted search, for the "Results for ..." caption
    pub fn submitted_query(&self) -> Option<&str> {
        self.submitted_query.as_deref()
    }

    pub fn state(&self) -> &RequestState<Vec<RecipeSummary>> {
        self.search.state()
    }

    /// Run the search for the open form, then close it whatever the outcome.
    ///
    /// A query rejected before sending leaves the form, the caption and the
    /// results exactly as they were.
    pub async fn submit(
        &mut self,
        api: &dyn RecipeApi,
    ) -> Result<&RequestState<Vec<RecipeSummary>>, RecipeError> {
        let query = match &self.form {
            Some(form) if form.is_submittable() => form.query(),
            Some(_) => {
                return Err(RecipeError::InvalidInput(
                    "enter at least one ingredient".to_string(),
                ))
            }
            None => {
                return Err(RecipeError::InvalidInput(
                    "the ingredient form is not open".to_string(),
                ))
            }
        };

        SearchByIngredients.validate(&query)?;

        debug!("submitting ingredient search {:?}", query);
        self.search.execute(api, query.clone()).await?;
        self.submitted_query = Some(query);
        self.form = None;
        Ok(self.search.state())
    }

    pub async fn retry(
        &mut self,
        api: &dyn RecipeApi,
    ) -> Result<&RequestState<Vec<RecipeSummary>>, RecipeError> {
        self.search.retry(api).await
    }

    /// Pull-to-refresh
    pub async fn refresh(
        &mut self,
        api: &dyn RecipeApi,
    ) -> Result<&RequestState<Vec<RecipeSummary>>, RecipeError> {
        self.search.refresh(api).await
    }

    /// Whether the whole screen should be replaced by a spinner
    pub fn shows_full_page_loader(&self) -> bool {
        self.search.state().shows_full_page_loader()
    }
}

/// Which half of the recipe body is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPanel {
    #[default]
    Ingredients,
    Instructions,
}

impl DetailPanel {
    pub fn toggled(self) -> Self {
        match self {
            DetailPanel::Ingredients => DetailPanel::Instructions,
            DetailPanel::Instructions => DetailPanel::Ingredients,
        }
    }
}

/// Recipe details screen, opened from a route carrying the recipe id
pub struct DetailsScreen {
    id: u64,
    panel: DetailPanel,
    is_favorite: bool,
    details: DetailsController,
}

impl DetailsScreen {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            panel: DetailPanel::default(),
            is_favorite: false,
            details: DetailsController::default(),
        }
    }

    /// Build from the raw route parameter
    pub fn from_route(id: &str) -> Result<Self, RecipeError> {
        let id = id.trim();
        let id = id
            .parse::<u64>()
            .map_err(|_| RecipeError::InvalidInput(format!("invalid recipe id {:?}", id)))?;
        Ok(Self::new(id))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> &RequestState<RecipeDetails> {
        self.details.state()
    }

    pub async fn load(
        &mut self,
        api: &dyn RecipeApi,
    ) -> Result<&RequestState<RecipeDetails>, RecipeError> {
        self.details.execute(api, self.id).await
    }

    pub async fn retry(
        &mut self,
        api: &dyn RecipeApi,
    ) -> Result<&RequestState<RecipeDetails>, RecipeError> {
        self.details.retry(api).await
    }

    pub fn panel(&self) -> DetailPanel {
        self.panel
    }

    pub fn select_panel(&mut self, panel: DetailPanel) {
        self.panel = panel;
    }

    pub fn toggle_panel(&mut self) {
        self.panel = self.panel.toggled();
    }

    /// In-session only; nothing is persisted
    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }
}
