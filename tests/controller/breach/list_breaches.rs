//! Tests for the list_breaches endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use breachwatch::{
    model::breach::{BreachDto, PaginationParams},
    server::controller::breach::list_breaches,
};

use super::*;

/// Expect 200 with the requested page of records across users
#[tokio::test]
async fn returns_requested_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .with_user("bob@example.com", false)
        .build()
        .await?;
    test.breach().insert_breach_record(1, "Adobe", None).await?;
    test.breach().insert_breach_record(2, "LinkedIn", None).await?;
    test.breach().insert_breach_record(2, "Dropbox", None).await?;

    let result = list_breaches(
        State(test.into_app_state()),
        Query(PaginationParams {
            skip: Some(1),
            limit: Some(5),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let breaches: Vec<BreachDto> = json_body(resp).await;
    let names: Vec<&str> = breaches.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["LinkedIn", "Dropbox"]);

    Ok(())
}

/// Expect the default page to start at the first record
#[tokio::test]
async fn defaults_pagination() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .build()
        .await?;
    test.breach().insert_breach_record(1, "Adobe", None).await?;

    let result = list_breaches(
        State(test.into_app_state()),
        Query(PaginationParams::default()),
    )
    .await;

    let resp = result.unwrap().into_response();
    let breaches: Vec<BreachDto> = json_body(resp).await;
    assert_eq!(breaches.len(), 1);

    Ok(())
}

/// Expect 404 when the page holds no records
#[tokio::test]
async fn fails_for_empty_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_breach_tables().build().await?;

    let result = list_breaches(
        State(test.into_app_state()),
        Query(PaginationParams::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
