use thiserror::Error;

/// Errors that can occur while running a recipe search
#[derive(Error, Debug)]
pub enum SearchError {
    /// The ingredient input was empty after trimming
    #[error("Please enter at least one ingredient.")]
    EmptyIngredients,

    /// Failed to fetch the dataset over HTTP
    #[error("Error fetching data: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Failed to read the dataset from disk
    #[error("Error reading dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset was retrieved but could not be parsed as CSV
    #[error("Error parsing dataset: {0}")]
    Parse(#[from] csv::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SearchError {
    /// True for the "dataset could not be retrieved or parsed" group of
    /// failures, which share one user-visible message.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(
            self,
            SearchError::Fetch(_) | SearchError::Io(_) | SearchError::Parse(_)
        )
    }
}
