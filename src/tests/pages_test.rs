use axum::http::StatusCode;

use crate::tests::setup_test::setup_test;

#[tokio::test]
async fn test_home_page() {
    let test = setup_test().await;

    let response = test.server().get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Welcome to the home page!"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let test = setup_test().await;

    let response = test.server().get("/nothing-here").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_schedule_form_page() {
    let test = setup_test().await;

    let response = test.server().get("/schedule").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("<form id=\"schedule\">"));
}
