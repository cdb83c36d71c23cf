use kitchen_canvas::{search_recipes, DatasetSource, SearchOutcome, SearchQuery};

const DATASET: &str = "\
name,ingredients,dietary,cuisine,instructions,images
Butter Chicken,\"chicken, butter, cream, tomato\",non-vegetarian,Indian,Simmer chicken in the sauce.,butter-chicken.jpg
Palak Paneer,\"paneer, spinach, garlic\",vegetarian,Indian,Blanch the spinach and blend.,palak-paneer.jpg
Margherita Pizza,\"flour, tomato, mozzarella, basil\",vegetarian,Italian,Bake at full heat.,margherita.jpg
";

#[tokio::test]
async fn test_search_returns_matches_in_dataset_order() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipe-dataset.csv")
        .with_status(200)
        .with_header("content-type", "text/csv")
        .with_body(DATASET)
        .create();

    let source = DatasetSource::Url(format!("{}/recipe-dataset.csv", server.url()));
    let query = SearchQuery::new("tomato", "", "");
    let outcome = search_recipes(&source, &query, None).await.unwrap();

    match outcome {
        SearchOutcome::Matches(recipes) => {
            let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
            assert_eq!(names, vec!["Butter Chicken", "Margherita Pizza"]);
        }
        SearchOutcome::NoMatches => panic!("expected matches"),
    }
}

#[tokio::test]
async fn test_filters_combine_with_substring_ingredients() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipe-dataset.csv")
        .with_status(200)
        .with_body(DATASET)
        .create();

    let source = DatasetSource::Url(format!("{}/recipe-dataset.csv", server.url()));
    // "pane" is a prefix of "paneer"; the dietary tag is compared
    // case-insensitively.
    let query = SearchQuery::new("pane", "VEGETARIAN", "Indian");
    let outcome = search_recipes(&source, &query, None).await.unwrap();

    match outcome {
        SearchOutcome::Matches(recipes) => {
            assert_eq!(recipes.len(), 1);
            assert_eq!(recipes[0].name, "Palak Paneer");
            assert_eq!(recipes[0].instructions, "Blanch the spinach and blend.");
        }
        SearchOutcome::NoMatches => panic!("expected a match"),
    }
}

#[tokio::test]
async fn test_no_matches_is_an_outcome_not_an_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipe-dataset.csv")
        .with_status(200)
        .with_body(DATASET)
        .create();

    let source = DatasetSource::Url(format!("{}/recipe-dataset.csv", server.url()));
    let query = SearchQuery::new("paneer", "", "Italian");
    let outcome = search_recipes(&source, &query, None).await.unwrap();

    assert_eq!(outcome, SearchOutcome::NoMatches);
}

#[tokio::test]
async fn test_fetch_failure_is_data_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipe-dataset.csv")
        .with_status(500)
        .create();

    let source = DatasetSource::Url(format!("{}/recipe-dataset.csv", server.url()));
    let query = SearchQuery::new("chicken", "", "");
    let err = search_recipes(&source, &query, None).await.unwrap_err();

    assert!(err.is_data_unavailable());
}

#[tokio::test]
async fn test_unparseable_dataset_is_data_unavailable() {
    let mut server = mockito::Server::new_async().await;
    // Valid header, then a row with a non-UTF-8 field. The search must fail
    // whole rather than matching against the rows that did parse.
    let _m = server
        .mock("GET", "/recipe-dataset.csv")
        .with_status(200)
        .with_body(b"name,ingredients\nButter Chicken,chicken\nBroken,\xff\xfe\n".as_slice())
        .create();

    let source = DatasetSource::Url(format!("{}/recipe-dataset.csv", server.url()));
    let query = SearchQuery::new("chicken", "", "");
    let err = search_recipes(&source, &query, None).await.unwrap_err();

    assert!(err.is_data_unavailable());
}

#[tokio::test]
async fn test_empty_query_never_touches_the_dataset() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipe-dataset.csv")
        .with_status(200)
        .with_body(DATASET)
        .expect(0)
        .create_async()
        .await;

    let source = DatasetSource::Url(format!("{}/recipe-dataset.csv", server.url()));
    let query = SearchQuery::new("   ", "vegan", "Indian");
    let err = search_recipes(&source, &query, None).await.unwrap_err();

    assert!(matches!(err, kitchen_canvas::SearchError::EmptyIngredients));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_dataset_is_refetched_on_every_search() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipe-dataset.csv")
        .with_status(200)
        .with_body(DATASET)
        .expect(2)
        .create_async()
        .await;

    let source = DatasetSource::Url(format!("{}/recipe-dataset.csv", server.url()));
    let query = SearchQuery::new("basil", "", "");

    let first = search_recipes(&source, &query, None).await.unwrap();
    let second = search_recipes(&source, &query, None).await.unwrap();

    assert_eq!(first, second);
    mock.assert_async().await;
}
