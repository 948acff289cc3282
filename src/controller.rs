//! Request lifecycle for a single screen.
//!
//! A [`RequestController`] owns one [`RequestState`] and moves it through
//! `Idle -> Loading -> Success | Error`. Each request is tagged with a
//! sequence number; a completion that is not the most recently issued one is
//! dropped, so a slow earlier response can never overwrite a newer one.

use std::fmt;

use async_trait::async_trait;
use log::{debug, error, info};

use crate::client::RecipeApi;
use crate::model::{RecipeDetails, RecipeSummary};
use crate::RecipeError;

pub const SEARCH_FAILED_MESSAGE: &str = "Failed to fetch recipes. Please try again.";
pub const DETAILS_FAILED_MESSAGE: &str = "Failed to load recipe details. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// What a screen renders from
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    phase: Phase,
    data: Option<T>,
    error_message: Option<String>,
    is_refreshing: bool,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            data: None,
            error_message: None,
            is_refreshing: false,
        }
    }
}

impl<T> RequestState<T> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last successful payload. Kept while a newer request is loading or after it fails.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Fixed user-facing message, present only in [`Phase::Error`]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Set while a pull-to-refresh is in flight; orthogonal to `phase`
    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

impl RequestState<Vec<RecipeSummary>> {
    pub fn results(&self) -> &[RecipeSummary] {
        self.data.as_deref().unwrap_or(&[])
    }

    /// Loading with nothing on screen yet, and not a pull-to-refresh
    pub fn shows_full_page_loader(&self) -> bool {
        self.is_loading() && !self.is_refreshing && self.results().is_empty()
    }
}

/// One remote operation a controller can drive
#[async_trait]
pub trait Endpoint: Send + Sync {
    type Param: Clone + fmt::Debug + Send + Sync;
    type Output: Send;

    /// Short name used in log lines
    fn name(&self) -> &'static str;

    /// The message shown for any failure of this endpoint
    fn failure_message(&self) -> &'static str;

    /// Reject parameters that must never reach the network
    fn validate(&self, _param: &Self::Param) -> Result<(), RecipeError> {
        Ok(())
    }

    async fn fetch(
        &self,
        api: &dyn RecipeApi,
        param: &Self::Param,
    ) -> Result<Self::Output, RecipeError>;
}

/// Search by a comma-joined ingredient list
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchByIngredients;

#[async_trait]
impl Endpoint for SearchByIngredients {
    type Param = String;
    type Output = Vec<RecipeSummary>;

    fn name(&self) -> &'static str {
        "complexSearch"
    }

    fn failure_message(&self) -> &'static str {
        SEARCH_FAILED_MESSAGE
    }

    fn validate(&self, query: &String) -> Result<(), RecipeError> {
        if query.trim().is_empty() {
            return Err(RecipeError::InvalidInput(
                "ingredient query cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    async fn fetch(
        &self,
        api: &dyn RecipeApi,
        query: &String,
    ) -> Result<Vec<RecipeSummary>, RecipeError> {
        api.complex_search(query).await
    }
}

/// Load one recipe by id
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeInformation;

#[async_trait]
impl Endpoint for RecipeInformation {
    type Param = u64;
    type Output = RecipeDetails;

    fn name(&self) -> &'static str {
        "information"
    }

    fn failure_message(&self) -> &'static str {
        DETAILS_FAILED_MESSAGE
    }

    async fn fetch(&self, api: &dyn RecipeApi, id: &u64) -> Result<RecipeDetails, RecipeError> {
        api.recipe_information(*id).await
    }
}

/// Handle for one issued request; pass it back to [`RequestController::complete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Ticket {
    seq: u64,
}

pub struct RequestController<E: Endpoint> {
    endpoint: E,
    state: RequestState<E::Output>,
    last_param: Option<E::Param>,
    issued: u64,
}

pub type SearchController = RequestController<SearchByIngredients>;
pub type DetailsController = RequestController<RecipeInformation>;

impl<E: Endpoint + Default> Default for RequestController<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E: Endpoint> RequestController<E> {
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            state: RequestState::default(),
            last_param: None,
            issued: 0,
        }
    }

    pub fn state(&self) -> &RequestState<E::Output> {
        &self.state
    }

    /// Parameter of the most recently issued request
    pub fn last_param(&self) -> Option<&E::Param> {
        self.last_param.as_ref()
    }

    /// Mark a request as started and hand out its ticket.
    ///
    /// Use together with [`complete`](Self::complete) when the caller drives
    /// the network future itself and several requests may overlap.
    pub fn begin(&mut self, param: E::Param) -> Result<Ticket, RecipeError> {
        self.begin_with(param, false)
    }

    /// Like [`begin`](Self::begin) for the last parameter, with `is_refreshing` set
    pub fn begin_refresh(&mut self) -> Result<Ticket, RecipeError> {
        let param = self.last_param.clone().ok_or(RecipeError::NothingToRetry)?;
        self.begin_with(param, true)
    }

    /// Apply the outcome of the request behind `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when a newer request has
    /// been issued since.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<E::Output, RecipeError>,
    ) -> bool {
        if ticket.seq != self.issued {
            debug!(
                "{}: dropping stale response #{} (latest is #{})",
                self.endpoint.name(),
                ticket.seq,
                self.issued
            );
            return false;
        }

        self.state.is_refreshing = false;
        match outcome {
            Ok(data) => {
                info!("{}: request #{} succeeded", self.endpoint.name(), ticket.seq);
                self.state.phase = Phase::Success;
                self.state.data = Some(data);
                self.state.error_message = None;
            }
            Err(e) => {
                error!(
                    "{}: request #{} for {:?} failed (network failure: {}): {}",
                    self.endpoint.name(),
                    ticket.seq,
                    self.last_param,
                    e.is_network_failure(),
                    e
                );
                self.state.phase = Phase::Error;
                self.state.error_message = Some(self.endpoint.failure_message().to_string());
            }
        }
        true
    }

    /// Run one request to completion.
    ///
    /// Request failures end up in the state as [`Phase::Error`]; the `Err`
    /// branch is reserved for parameters rejected before anything was sent.
    pub async fn execute(
        &mut self,
        api: &dyn RecipeApi,
        param: E::Param,
    ) -> Result<&RequestState<E::Output>, RecipeError> {
        self.run(api, param, false).await
    }

    /// Re-run the last request
    pub async fn retry(
        &mut self,
        api: &dyn RecipeApi,
    ) -> Result<&RequestState<E::Output>, RecipeError> {
        let param = self.last_param.clone().ok_or(RecipeError::NothingToRetry)?;
        self.run(api, param, false).await
    }

    /// Re-run the last request with `is_refreshing` set while it is in flight
    pub async fn refresh(
        &mut self,
        api: &dyn RecipeApi,
    ) -> Result<&RequestState<E::Output>, RecipeError> {
        let param = self.last_param.clone().ok_or(RecipeError::NothingToRetry)?;
        self.run(api, param, true).await
    }

    /// Back to `Idle`. Requests still in flight are invalidated.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.state = RequestState::default();
        self.last_param = None;
    }

    async fn run(
        &mut self,
        api: &dyn RecipeApi,
        param: E::Param,
        refreshing: bool,
    ) -> Result<&RequestState<E::Output>, RecipeError> {
        let ticket = self.begin_with(param.clone(), refreshing)?;
        let outcome = self.endpoint.fetch(api, &param).await;
        self.complete(ticket, outcome);
        Ok(&self.state)
    }

    fn begin_with(&mut self, param: E::Param, refreshing: bool) -> Result<Ticket, RecipeError> {
        self.endpoint.validate(&param)?;

        self.issued += 1;
        debug!(
            "{}: issuing request #{} for {:?}",
            self.endpoint.name(),
            self.issued,
            param
        );
        self.last_param = Some(param);
        self.state.phase = Phase::Loading;
        self.state.error_message = None;
        self.state.is_refreshing = refreshing;
        Ok(Ticket { seq: self.issued })
    }
}
