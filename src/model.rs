use scraper::Html;
use serde::{Deserialize, Deserializer, Serialize};

/// Minimal recipe data returned by the ingredient search, enough for a list row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_type: Option<String>,
}

/// Envelope of `GET /recipes/complexSearch`. `results` is mandatory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<RecipeSummary>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u32>,
}

/// Full recipe record returned by `GET /recipes/{id}/information`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDetails {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub image: Option<String>,
    pub image_type: Option<String>,
    pub ready_in_minutes: Option<i32>,
    pub preparation_minutes: Option<i32>,
    pub cooking_minutes: Option<i32>,
    pub servings: Option<u32>,
    pub source_url: Option<String>,
    pub source_name: Option<String>,
    pub credits_text: Option<String>,
    pub license: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub vegetarian: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub vegan: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub gluten_free: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub dairy_free: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub very_healthy: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub cheap: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub very_popular: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub sustainable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub low_fodmap: bool,

    pub weight_watcher_smart_points: Option<f64>,
    pub gaps: Option<String>,
    pub aggregate_likes: Option<u32>,
    pub health_score: Option<f64>,
    /// Price in US cents
    pub price_per_serving: Option<f64>,
    pub spoonacular_score: Option<f64>,
    pub spoonacular_source_url: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cuisines: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub dish_types: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub diets: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub occasions: Vec<String>,
    /// Free text, frequently HTML
    pub instructions: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub analyzed_instructions: Vec<InstructionBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtendedIngredient {
    pub id: Option<u64>,
    pub aisle: Option<String>,
    pub image: Option<String>,
    /// `SOLID` or `LIQUID`
    pub consistency: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub name_clean: Option<String>,
    /// Human-readable line as written in the source recipe, e.g. "2 cups flour"
    #[serde(deserialize_with = "null_as_default")]
    pub original: String,
    pub original_name: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Vec<String>,
    pub measures: Option<Measures>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measures {
    pub us: Measure,
    pub metric: Measure,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Measure {
    pub amount: f64,
    pub unit_short: String,
    pub unit_long: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructionBlock {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructionStep {
    pub number: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub step: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ingredients: Vec<StepItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub equipment: Vec<StepItem>,
    pub length: Option<StepLength>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepItem {
    pub id: Option<u64>,
    pub name: String,
    pub localized_name: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepLength {
    pub number: u32,
    pub unit: String,
}

impl RecipeDetails {
    /// Preparation plus cooking time. Missing or negative values count as zero.
    pub fn total_minutes(&self) -> u32 {
        let minutes = |value: Option<i32>| value.unwrap_or(0).max(0) as u32;
        minutes(self.preparation_minutes) + minutes(self.cooking_minutes)
    }

    /// Price per serving in dollars, e.g. "$1.23"
    pub fn cost_per_serving(&self) -> Option<String> {
        self.price_per_serving
            .map(|cents| format!("${:.2}", cents / 100.0))
    }

    /// The `original` line of every ingredient, in payload order
    pub fn ingredient_lines(&self) -> Vec<&str> {
        self.extended_ingredients
            .iter()
            .map(|ingredient| ingredient.original.as_str())
            .collect()
    }

    /// Instructions with markup removed; `None` when nothing readable remains
    pub fn clean_instructions(&self) -> Option<String> {
        non_empty_text(self.instructions.as_deref())
    }

    /// Summary with markup removed
    pub fn summary_text(&self) -> Option<String> {
        non_empty_text(self.summary.as_deref())
    }
}

fn non_empty_text(markup: Option<&str>) -> Option<String> {
    let text = strip_markup(markup?);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Remove every tag from an HTML fragment and return its text content, trimmed.
///
/// Character entities are decoded along the way (`&amp;` becomes `&`).
pub fn strip_markup(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    fragment
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
