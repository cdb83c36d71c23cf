use std::time::Duration;

use crate::dataset::DatasetSource;
use crate::model::{SearchOutcome, SearchQuery};
use crate::{search_recipes, SearchError};

/// Builder for configuring and executing one recipe search
#[derive(Debug, Default)]
pub struct RecipeSearchBuilder {
    source: Option<DatasetSource>,
    ingredients: Option<String>,
    dietary: String,
    cuisine: String,
    timeout: Option<Duration>,
}

impl RecipeSearchBuilder {
    /// Set the dataset source to a URL
    ///
    /// # Example
    /// ```
    /// use kitchen_canvas::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .dataset_url("https://example.com/recipe-dataset.csv");
    /// ```
    pub fn dataset_url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(DatasetSource::Url(url.into()));
        self
    }

    /// Set the dataset source to a local CSV file
    ///
    /// # Example
    /// ```
    /// use kitchen_canvas::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .dataset_file("recipe-dataset.csv");
    /// ```
    pub fn dataset_file(mut self, path: impl Into<String>) -> Self {
        self.source = Some(DatasetSource::Path(path.into()));
        self
    }

    /// Set the free-text ingredient query (comma-separated)
    ///
    /// # Example
    /// ```
    /// use kitchen_canvas::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .dataset_file("recipe-dataset.csv")
    ///     .ingredients("chicken, rice");
    /// ```
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    /// Restrict matches to a dietary tag (case-insensitive exact match)
    pub fn dietary(mut self, dietary: impl Into<String>) -> Self {
        self.dietary = dietary.into();
        self
    }

    /// Restrict matches to a cuisine tag (case-insensitive exact match)
    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    /// Set a timeout for the dataset HTTP request
    ///
    /// # Example
    /// ```
    /// use kitchen_canvas::RecipeSearch;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .dataset_url("https://example.com/recipe-dataset.csv")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Execute the search
    ///
    /// # Errors
    /// Returns `SearchError` if:
    /// - No dataset source or no ingredient query was specified
    /// - The ingredient query is empty after trimming
    /// - The dataset cannot be fetched or parsed
    ///
    /// An empty result is not an error: it comes back as
    /// [`SearchOutcome::NoMatches`].
    ///
    /// # Example
    /// ```no_run
    /// # use kitchen_canvas::RecipeSearch;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let outcome = RecipeSearch::builder()
    ///     .dataset_file("recipe-dataset.csv")
    ///     .ingredients("paneer")
    ///     .cuisine("Indian")
    ///     .execute()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute(self) -> Result<SearchOutcome, SearchError> {
        let source = self.source.ok_or_else(|| {
            SearchError::Builder(
                "No dataset source specified. Use .dataset_url() or .dataset_file()".to_string(),
            )
        })?;
        let ingredients = self.ingredients.ok_or_else(|| {
            SearchError::Builder("No ingredient query specified. Use .ingredients()".to_string())
        })?;

        let query = SearchQuery::new(ingredients, self.dietary, self.cuisine);
        search_recipes(&source, &query, self.timeout).await
    }
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for a recipe search
    ///
    /// # Example
    /// ```
    /// use kitchen_canvas::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}
