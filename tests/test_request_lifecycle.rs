use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use mockito::Matcher;
use recipe_finder::{
    Endpoint, Phase, RecipeApi, RecipeDetails, RecipeError, RecipeSummary, SearchByIngredients,
    SearchController, SearchScreen, SpoonacularClient, SEARCH_FAILED_MESSAGE,
};
use tokio::net::TcpListener;

/// Answers search calls from a queue, recording every query it receives
#[derive(Default)]
struct ScriptedApi {
    responses: Mutex<VecDeque<Result<Vec<RecipeSummary>, RecipeError>>>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedApi {
    fn push(&self, response: Result<Vec<RecipeSummary>, RecipeError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeApi for ScriptedApi {
    async fn complex_search(
        &self,
        include_ingredients: &str,
    ) -> Result<Vec<RecipeSummary>, RecipeError> {
        self.queries
            .lock()
            .unwrap()
            .push(include_ingredients.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }

    async fn recipe_information(&self, _id: u64) -> Result<RecipeDetails, RecipeError> {
        unimplemented!("details are not scripted")
    }
}

fn soup() -> Vec<RecipeSummary> {
    vec![RecipeSummary {
        id: 1,
        title: "Chicken Soup".to_string(),
        image: Some("https://img.example.com/1.jpg".to_string()),
        image_type: None,
    }]
}

fn server_error() -> RecipeError {
    RecipeError::Status {
        endpoint: "/recipes/complexSearch".to_string(),
        status: 503,
    }
}

/// A server that accepts connections and never answers
async fn unresponsive_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_search_idle_loading_success() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::UrlEncoded(
            "includeIngredients".into(),
            "chicken".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"id": 1, "title": "Chicken Soup", "image": "https://img.example.com/1.jpg"}]}"#)
        .create_async()
        .await;
    let client = SpoonacularClient::builder()
        .base_url(server.url())
        .api_key("test-key")
        .build()
        .unwrap();

    let mut controller = SearchController::default();
    assert_eq!(controller.state().phase(), Phase::Idle);

    let ticket = controller.begin("chicken".to_string()).unwrap();
    assert_eq!(controller.state().phase(), Phase::Loading);

    let outcome = SearchByIngredients
        .fetch(&client, &"chicken".to_string())
        .await;
    assert!(controller.complete(ticket, outcome));

    let state = controller.state();
    assert_eq!(state.phase(), Phase::Success);
    assert_eq!(state.results().len(), 1);
    assert_eq!(state.results()[0].title, "Chicken Soup");
    assert!(state.error_message().is_none());
}

#[tokio::test]
async fn test_search_timeout_keeps_previous_results() {
    let api = ScriptedApi::default();
    api.push(Ok(soup()));

    let mut controller = SearchController::default();
    controller
        .execute(&api, "chicken".to_string())
        .await
        .unwrap();
    let before = controller.state().results().to_vec();

    let slow = SpoonacularClient::builder()
        .base_url(unresponsive_server().await)
        .api_key("test-key")
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let state = controller
        .execute(&slow, "chicken".to_string())
        .await
        .unwrap();
    assert_eq!(state.phase(), Phase::Error);
    assert_eq!(state.error_message(), Some(SEARCH_FAILED_MESSAGE));
    assert_eq!(state.results(), before.as_slice());
}

#[tokio::test]
async fn test_timeout_from_idle_has_no_results() {
    let slow = SpoonacularClient::builder()
        .base_url(unresponsive_server().await)
        .api_key("test-key")
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let mut controller = SearchController::default();
    let state = controller
        .execute(&slow, "chicken".to_string())
        .await
        .unwrap();
    assert_eq!(state.phase(), Phase::Error);
    assert!(!state.error_message().unwrap_or_default().is_empty());
    assert!(state.results().is_empty());
}

#[tokio::test]
async fn test_retry_after_error_succeeds() {
    let api = ScriptedApi::default();
    api.push(Err(server_error()));
    api.push(Ok(soup()));

    let mut controller = SearchController::default();
    let state = controller
        .execute(&api, "chicken".to_string())
        .await
        .unwrap();
    assert_eq!(state.phase(), Phase::Error);

    let state = controller.retry(&api).await.unwrap();
    assert_eq!(state.phase(), Phase::Success);
    assert!(state.error_message().is_none());
    assert_eq!(state.results().len(), 1);
    assert_eq!(api.queries(), vec!["chicken", "chicken"]);
}

#[tokio::test]
async fn test_retry_without_request_is_rejected() {
    let api = ScriptedApi::default();
    let mut controller = SearchController::default();

    let result = controller.retry(&api).await;
    assert!(matches!(result, Err(RecipeError::NothingToRetry)));
    assert!(api.queries().is_empty());
}

#[tokio::test]
async fn test_refresh_clears_flag_when_done() {
    let api = ScriptedApi::default();
    api.push(Ok(soup()));
    api.push(Err(server_error()));

    let mut controller = SearchController::default();
    controller
        .execute(&api, "chicken".to_string())
        .await
        .unwrap();

    let state = controller.refresh(&api).await.unwrap();
    assert_eq!(state.phase(), Phase::Error);
    assert!(!state.is_refreshing());
    assert_eq!(state.results().len(), 1);
}

#[tokio::test]
async fn test_search_screen_submit_flow() {
    let api = ScriptedApi::default();
    api.push(Ok(soup()));

    let mut screen = SearchScreen::new();
    let form = screen.open_form();
    form.add_token("chicken");
    form.add_token("tomatoes");
    form.add_token("chicken");
    assert!(form.is_submittable());

    let state = screen.submit(&api).await.unwrap();
    assert_eq!(state.phase(), Phase::Success);
    assert!(!screen.is_form_open());
    assert_eq!(screen.submitted_query(), Some("chicken,tomatoes"));
    assert_eq!(api.queries(), vec!["chicken,tomatoes"]);
    assert!(!screen.shows_full_page_loader());
}

#[tokio::test]
async fn test_search_screen_rejects_empty_form() {
    let api = ScriptedApi::default();
    let mut screen = SearchScreen::new();

    assert!(screen.submit(&api).await.is_err());

    screen.open_form().set_from_text("   ");
    let result = screen.submit(&api).await;
    assert!(matches!(result, Err(RecipeError::InvalidInput(_))));
    // the form stays open so the user can keep typing
    assert!(screen.is_form_open());
    assert!(api.queries().is_empty());
}

#[tokio::test]
async fn test_separator_only_form_keeps_previous_search() {
    let api = ScriptedApi::default();
    api.push(Ok(soup()));

    let mut screen = SearchScreen::new();
    screen.open_form().set_from_text("chicken");
    screen.submit(&api).await.unwrap();

    // passes the non-blank check but yields no tokens
    let form = screen.open_form();
    form.set_from_text(", ,");
    assert!(form.is_submittable());
    assert_eq!(form.query(), "");

    let result = screen.submit(&api).await;
    assert!(matches!(result, Err(RecipeError::InvalidInput(_))));
    assert_eq!(screen.submitted_query(), Some("chicken"));
    assert!(screen.is_form_open());
    assert_eq!(screen.state().phase(), Phase::Success);
    assert_eq!(screen.state().results().len(), 1);
    assert_eq!(api.queries(), vec!["chicken"]);
}

#[tokio::test]
async fn test_search_screen_closes_form_on_failure() {
    let api = ScriptedApi::default();
    api.push(Err(server_error()));

    let mut screen = SearchScreen::new();
    screen.open_form().set_from_text("beef, onions");
    let state = screen.submit(&api).await.unwrap();
    assert_eq!(state.phase(), Phase::Error);
    assert!(!screen.is_form_open());

    api.push(Ok(soup()));
    let state = screen.refresh(&api).await.unwrap();
    assert_eq!(state.phase(), Phase::Success);
    assert_eq!(api.queries(), vec!["beef,onions", "beef,onions"]);
}
