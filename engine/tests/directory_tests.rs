mod common;

use common::{spawn_trivia_api, test_state};
use quizstarter_engine::{CategoryDirectory, QuizError};

#[tokio::test]
async fn serves_categories_from_cache_after_the_first_fetch() {
    let mock = spawn_trivia_api(0).await;
    let state = test_state(&mock.base_url);
    let directory = CategoryDirectory::new(&state);

    let first = directory.categories().await.expect("first fetch");
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].id, 9);
    assert_eq!(first[0].name, "General Knowledge");

    let second = directory.categories().await.expect("cached fetch");
    assert_eq!(second, first);
    assert_eq!(mock.category_hits(), 1, "second call must not hit upstream");
}

#[tokio::test]
async fn fetch_failure_is_a_typed_error_not_an_empty_list() {
    let mock = spawn_trivia_api(0).await;
    mock.fail_categories(true);
    let state = test_state(&mock.base_url);
    let directory = CategoryDirectory::new(&state);

    let err = directory.categories().await.expect_err("fetch must fail");
    assert!(matches!(err, QuizError::CategoryFetch(_)));
}

#[tokio::test]
async fn refresh_bypasses_the_cache() {
    let mock = spawn_trivia_api(0).await;
    let state = test_state(&mock.base_url);
    let directory = CategoryDirectory::new(&state);

    directory.categories().await.expect("first fetch");
    directory.refresh().await.expect("refresh");

    assert_eq!(mock.category_hits(), 2);
}

#[tokio::test]
async fn failed_refresh_falls_back_to_the_previous_snapshot() {
    let mock = spawn_trivia_api(0).await;
    let state = test_state(&mock.base_url);
    let directory = CategoryDirectory::new(&state);

    let first = directory.categories().await.expect("first fetch");
    mock.fail_categories(true);

    let stale = directory.refresh().await.expect("stale fallback");
    assert_eq!(stale, first);
    assert_eq!(mock.category_hits(), 2);
}
