pub mod builder;
pub mod config;
pub mod dataset;
pub mod error;
pub mod matcher;
pub mod model;
pub mod state;

use std::time::Duration;

use log::{debug, info};

pub use crate::builder::{RecipeSearch, RecipeSearchBuilder};
pub use crate::config::{AppConfig, TimingConfig};
pub use crate::dataset::{load_dataset, DatasetSource};
pub use crate::error::SearchError;
pub use crate::matcher::match_recipes;
pub use crate::model::{
    RecipeRecord, SearchOutcome, SearchQuery, CUISINE_OPTIONS, DIETARY_OPTIONS,
};
pub use crate::state::{transition, ViewEvent, ViewState};

/// Run one full search: validate the query, load the dataset, filter it.
///
/// The dataset is fetched and parsed fresh on every call; nothing is cached
/// between searches. The three terminal outcomes stay distinguishable:
/// a validation or load failure is an `Err`, while a search that simply
/// found nothing is `Ok(SearchOutcome::NoMatches)`.
pub async fn search_recipes(
    source: &DatasetSource,
    query: &SearchQuery,
    timeout: Option<Duration>,
) -> Result<SearchOutcome, SearchError> {
    // Reject an empty ingredient query before touching the dataset.
    query.validate()?;

    let records = load_dataset(source, timeout).await?;
    let matches = match_recipes(records, query);
    debug!("query {:?} matched {} records", query, matches.len());

    if matches.is_empty() {
        info!("no recipes matched the query");
        Ok(SearchOutcome::NoMatches)
    } else {
        Ok(SearchOutcome::Matches(matches))
    }
}
