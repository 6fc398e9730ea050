//! Tests for the search_breaches endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use breachwatch::{
    model::{api::ErrorDto, breach::BreachDto},
    server::controller::breach::search_breaches,
};

use super::*;

/// Expect 200 with the breaches synced for a user without records
#[tokio::test]
async fn returns_synced_breaches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .with_breached_account_endpoint(
            "alice@example.com",
            vec![
                factory::mock_breach_entry("Adobe", "2013-10-04"),
                factory::mock_breach_entry("LinkedIn", "2012-05-05"),
            ],
            1,
        )
        .build()
        .await?;

    let result = search_breaches(
        State(test.into_app_state()),
        Path("alice@example.com".to_string()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let breaches: Vec<BreachDto> = json_body(resp).await;
    assert_eq!(breaches.len(), 2);
    assert_eq!(breaches[0].name, "Adobe");
    assert_eq!(breaches[0].user_id, 1);
    assert_eq!(breaches[0].data_classes.len(), 2);
    test.assert_mocks();

    Ok(())
}

/// Expect 200 with an empty list when the breach API does not know the account
#[tokio::test]
async fn returns_empty_list_for_unknown_account() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .with_not_found_endpoint("alice@example.com", 1)
        .build()
        .await?;

    let result = search_breaches(
        State(test.into_app_state()),
        Path("alice@example.com".to_string()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let breaches: Vec<BreachDto> = json_body(resp).await;
    assert!(breaches.is_empty());
    test.assert_mocks();

    Ok(())
}

/// Expect stored breaches to be served without calling the breach API
#[tokio::test]
async fn serves_stored_breaches_without_lookup() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .with_breached_account_endpoint(
            "alice@example.com",
            vec![factory::mock_breach_entry("Dropbox", "2012-07-01")],
            0,
        )
        .build()
        .await?;
    test.breach()
        .insert_breach_record(1, "Adobe", factory::breach_date("2013-10-04"))
        .await?;

    let result = search_breaches(
        State(test.into_app_state()),
        Path("alice@example.com".to_string()),
    )
    .await;

    let resp = result.unwrap().into_response();
    let breaches: Vec<BreachDto> = json_body(resp).await;
    assert_eq!(breaches.len(), 1);
    assert_eq!(breaches[0].name, "Adobe");
    test.assert_mocks();

    Ok(())
}

/// Expect 404 for an email nobody registered
#[tokio::test]
async fn fails_for_unregistered_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_not_found_endpoint("mallory@example.com", 0)
        .build()
        .await?;

    let result = search_breaches(
        State(test.into_app_state()),
        Path("mallory@example.com".to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.contains("mallory@example.com"));
    test.assert_mocks();

    Ok(())
}

/// Expect 429 to be passed through when the breach API rate limits us
#[tokio::test]
async fn reports_rate_limiting() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .with_upstream_error_endpoint("alice@example.com", 429, 1)
        .build()
        .await?;

    let result = search_breaches(
        State(test.into_app_state()),
        Path("alice@example.com".to_string()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    test.assert_mocks();

    Ok(())
}

/// Expect 503 when the breach API fails with a server error
#[tokio::test]
async fn reports_upstream_outage() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .with_upstream_error_endpoint("alice@example.com", 502, 1)
        .build()
        .await?;

    let result = search_breaches(
        State(test.into_app_state()),
        Path("alice@example.com".to_string()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    test.assert_mocks();

    Ok(())
}
