use serde::{Deserialize, Serialize};

/// One row of the recipe dataset.
///
/// Every field is a plain string keyed by the CSV header; a column missing
/// from a short row is an empty string, never an error. Only `ingredients`,
/// `dietary` and `cuisine` participate in matching; the rest are carried
/// through for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub name: String,
    /// Comma-separated, free-form ingredient names. Empty means "no
    /// ingredients recorded" and never matches any query.
    pub ingredients: String,
    /// Dietary tag such as "vegetarian". Empty means no restriction recorded.
    pub dietary: String,
    /// Cuisine tag such as "Indian". Empty means no cuisine recorded.
    pub cuisine: String,
    pub instructions: String,
    pub images: String,
}

/// The three filter values captured from one search submission.
///
/// Created per search, consumed once, never persisted. An empty `dietary` or
/// `cuisine` means "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub ingredients_raw: String,
    pub dietary: String,
    pub cuisine: String,
}

impl SearchQuery {
    pub fn new(
        ingredients_raw: impl Into<String>,
        dietary: impl Into<String>,
        cuisine: impl Into<String>,
    ) -> Self {
        Self {
            ingredients_raw: ingredients_raw.into(),
            dietary: dietary.into(),
            cuisine: cuisine.into(),
        }
    }

    /// Validate the query before any dataset work happens.
    ///
    /// The only hard requirement is at least one ingredient after trimming;
    /// the dataset is never fetched for a query that fails here.
    pub fn validate(&self) -> Result<(), crate::SearchError> {
        if self.ingredients_raw.trim().is_empty() {
            return Err(crate::SearchError::EmptyIngredients);
        }
        Ok(())
    }
}

/// Result of a completed search: either at least one matching record, or a
/// clean "nothing matched" outcome. Distinct from the error paths so callers
/// can tell an empty result from a failed one.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Matching records in dataset order.
    Matches(Vec<RecipeRecord>),
    /// The matcher ran and found nothing. Informational, not an error.
    NoMatches,
}

/// Dietary tags offered by the search form. The matcher itself accepts any
/// tag; this list exists for display and for warning on likely typos.
pub const DIETARY_OPTIONS: &[&str] = &["vegetarian", "vegan", "non-vegetarian", "gluten-free"];

/// Cuisine tags offered by the search form.
pub const CUISINE_OPTIONS: &[&str] = &[
    "Indian", "Italian", "Mexican", "French", "Chinese", "Japanese", "American", "Korean",
    "Turkish",
];
