use std::env;

use log::warn;

use kitchen_canvas::state::{transition, ViewEvent, ViewState};
use kitchen_canvas::{
    search_recipes, AppConfig, DatasetSource, SearchError, SearchOutcome, SearchQuery,
    CUISINE_OPTIONS, DIETARY_OPTIONS,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: kitchen-canvas <ingredients> [dietary] [cuisine]
    let args: Vec<String> = env::args().collect();
    let ingredients = args
        .get(1)
        .ok_or("Usage: kitchen-canvas <ingredients> [dietary] [cuisine]")?;
    let dietary = args.get(2).cloned().unwrap_or_default();
    let cuisine = args.get(3).cloned().unwrap_or_default();

    let config = AppConfig::load()?;
    let timing = config.timing.clone();

    // The form offers fixed tag lists; anything else still matches
    // literally, but it is most likely a typo worth flagging.
    warn_unknown_tag("dietary", &dietary, DIETARY_OPTIONS);
    warn_unknown_tag("cuisine", &cuisine, CUISINE_OPTIONS);

    let source = if config.dataset.starts_with("http://") || config.dataset.starts_with("https://")
    {
        DatasetSource::Url(config.dataset.clone())
    } else {
        DatasetSource::Path(config.dataset.clone())
    };

    let mut view = ViewState::default();
    println!("SomeThing Is Cooking...");
    tokio::time::sleep(timing.intro()).await;
    view = transition(view, ViewEvent::IntroFinished);

    view = transition(view, ViewEvent::Submit);
    debug_assert_eq!(view, ViewState::Validating);

    let query = SearchQuery::new(ingredients.clone(), dietary, cuisine);
    match search_recipes(&source, &query, Some(config.request_timeout())).await {
        Ok(SearchOutcome::Matches(recipes)) => {
            tokio::time::sleep(timing.reveal()).await;
            view = transition(view, ViewEvent::ResultsReady);
            println!("Found {} recipe(s):\n", recipes.len());
            for recipe in &recipes {
                println!("{}", recipe.name);
                if !recipe.images.is_empty() {
                    println!("  image: {}", recipe.images);
                }
                if !recipe.instructions.is_empty() {
                    println!("  {}", recipe.instructions);
                }
                println!();
            }
            view = transition(view, ViewEvent::Dismiss);
        }
        Ok(SearchOutcome::NoMatches) => {
            tokio::time::sleep(timing.reveal()).await;
            view = transition(view, ViewEvent::NoMatches);
            println!("No recipes found. Try different ingredients or filters.");
            tokio::time::sleep(timing.notice()).await;
            view = transition(view, ViewEvent::NoticeTimeout);
        }
        Err(SearchError::EmptyIngredients) => {
            view = transition(view, ViewEvent::ValidationFailed);
            eprintln!("{}", SearchError::EmptyIngredients);
        }
        Err(err) if err.is_data_unavailable() => {
            view = transition(view, ViewEvent::LoadFailed);
            eprintln!("Error fetching data. Please try again.");
            eprintln!("  {err}");
        }
        Err(err) => return Err(err.into()),
    }
    debug_assert_eq!(view, ViewState::AwaitingInput);

    Ok(())
}

fn warn_unknown_tag(kind: &str, tag: &str, options: &[&str]) {
    if !tag.is_empty() && !options.iter().any(|o| o.eq_ignore_ascii_case(tag)) {
        warn!("{kind} tag {tag:?} is not one of the form options {options:?}");
    }
}
