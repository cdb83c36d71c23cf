use std::time::Duration;

use log::debug;

use crate::error::SearchError;
use crate::model::RecipeRecord;

mod fetch;
mod parse;

pub use self::fetch::DatasetFetcher;
pub use self::parse::parse_records;

/// Where the recipe dataset lives.
///
/// The dataset is a small CSV with a header row; it is fetched and parsed
/// wholesale on every search, never cached.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// Fetch the CSV over HTTP(S)
    Url(String),
    /// Read the CSV from a local file
    Path(String),
}

/// Load the full dataset from `source`.
///
/// Either the whole dataset parses or the load fails; a partial result is
/// never returned. `timeout` applies to the HTTP request only.
pub async fn load_dataset(
    source: &DatasetSource,
    timeout: Option<Duration>,
) -> Result<Vec<RecipeRecord>, SearchError> {
    let raw = match source {
        DatasetSource::Url(url) => DatasetFetcher::new(timeout).fetch(url).await?,
        DatasetSource::Path(path) => tokio::fs::read(path).await?,
    };

    let records = parse_records(&raw)?;
    debug!("loaded {} recipe records from {:?}", records.len(), source);
    Ok(records)
}
