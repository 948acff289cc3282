use log::{debug, error};
use std::env;
use std::process::ExitCode;

use recipe_finder::{
    client_from_config, theme, DetailPanel, DetailsScreen, Phase, RecipeDetails, RecipeError,
    SearchScreen,
};

const USAGE: &str = "Usage:
  recipe-finder search <ingredient>...   (each argument may hold comma-separated ingredients)
  recipe-finder details <id> [--instructions]";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("search") if args.len() > 1 => search(&args[1..]).await,
        Some("details") if args.len() > 1 => {
            let show_instructions = args.iter().any(|arg| arg == "--instructions");
            details(&args[1], show_instructions).await
        }
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn search(words: &[String]) -> Result<ExitCode, RecipeError> {
    let client = client_from_config()?;
    let mut screen = SearchScreen::new();
    screen.open_form().set_from_text(ingredient_text(words));

    let state = screen.submit(&client).await?;
    if state.phase() == Phase::Error {
        eprintln!("{}", state.error_message().unwrap_or_default());
        return Ok(ExitCode::FAILURE);
    }

    if state.results().is_empty() {
        println!("No Recipes Found");
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(query) = screen.submitted_query() {
        println!("Results for \"{}\"", query);
    }
    for recipe in screen.state().results() {
        println!("{:>8}  {}", recipe.id, recipe.title);
    }
    Ok(ExitCode::SUCCESS)
}

/// Each argument is one or more comma-separated ingredients
fn ingredient_text(words: &[String]) -> String {
    words.join(", ")
}

async fn details(id: &str, show_instructions: bool) -> Result<ExitCode, RecipeError> {
    let client = client_from_config()?;
    let mut screen = DetailsScreen::from_route(id)?;
    if show_instructions {
        screen.select_panel(DetailPanel::Instructions);
    }

    screen.load(&client).await?;
    let state = screen.state();
    let recipe = match (state.phase(), state.data()) {
        (Phase::Success, Some(recipe)) => recipe,
        _ => {
            eprintln!("{}", state.error_message().unwrap_or_default());
            return Ok(ExitCode::FAILURE);
        }
    };

    debug!("rendering recipe {} with accent {}", recipe.id, theme().colors.primary);
    print_details(recipe, screen.panel());
    Ok(ExitCode::SUCCESS)
}

fn print_details(recipe: &RecipeDetails, panel: DetailPanel) {
    println!("# {}", recipe.title);
    println!();
    println!("Total:    {} min", recipe.total_minutes());
    if let Some(servings) = recipe.servings {
        println!("Servings: {}", servings);
    }
    if let Some(score) = recipe.health_score {
        println!("Health:   {}/100", score);
    }
    if let Some(cost) = recipe.cost_per_serving() {
        println!("Cost:     {}", cost);
    }
    if !recipe.diets.is_empty() {
        println!("Dietary:  {}", recipe.diets.join(", "));
    }
    if !recipe.occasions.is_empty() {
        println!("Perfect for: {}", recipe.occasions.join(", "));
    }
    println!();

    match panel {
        DetailPanel::Ingredients => {
            println!("## Ingredients");
            for line in recipe.ingredient_lines() {
                println!("- {}", line);
            }
        }
        DetailPanel::Instructions => {
            println!("## Instructions");
            match recipe.clean_instructions() {
                Some(text) => println!("{}", text),
                None => println!("No instructions available"),
            }
        }
    }
}
