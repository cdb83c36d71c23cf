use crate::model::{RecipeRecord, SearchQuery};

/// Filter `records` down to those matching `query`, preserving dataset order.
///
/// Pure function: no validation, no I/O, no mutation of the input records.
/// Callers are expected to have run [`SearchQuery::validate`] first; an
/// all-whitespace query must never reach this point.
///
/// A record is kept when all three predicates hold:
/// - some recipe ingredient token contains some query token as a substring
///   (that direction only, so "chick" finds "chicken"),
/// - the dietary tag matches (empty query tag matches everything),
/// - the cuisine tag matches, same rule.
pub fn match_recipes(records: Vec<RecipeRecord>, query: &SearchQuery) -> Vec<RecipeRecord> {
    let query_tokens = split_tokens(query.ingredients_raw.trim());

    records
        .into_iter()
        .filter(|recipe| {
            let recipe_tokens = if recipe.ingredients.is_empty() {
                Vec::new()
            } else {
                split_tokens(&recipe.ingredients)
            };

            let ingredients_match = query_tokens.iter().any(|ingredient| {
                recipe_tokens
                    .iter()
                    .any(|recipe_ing| recipe_ing.contains(ingredient.as_str()))
            });

            ingredients_match
                && tag_matches(&query.dietary, &recipe.dietary)
                && tag_matches(&query.cuisine, &recipe.cuisine)
        })
        .collect()
}

/// Split a comma-separated list into trimmed, lowercased tokens.
///
/// Empty tokens are kept on purpose: "chicken," yields ["chicken", ""] and
/// the empty token matches every non-empty ingredient list. That
/// permissiveness is the documented matching behavior, not an oversight.
fn split_tokens(list: &str) -> Vec<String> {
    list.split(',')
        .map(|item| item.trim().to_lowercase())
        .collect()
}

/// Case-insensitive exact tag comparison. An empty query tag means "any";
/// an empty record tag matches nothing but the empty query tag.
fn tag_matches(query_tag: &str, record_tag: &str) -> bool {
    if query_tag.is_empty() {
        return true;
    }
    !record_tag.is_empty() && record_tag.to_lowercase() == query_tag.to_lowercase()
}
