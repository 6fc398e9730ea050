//! Tests sending requests through the full router.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use breachwatch::{model::breach::BreachDto, server::router};
use tower::ServiceExt;

use super::*;

/// Expect the search route to resolve the email path segment
#[tokio::test]
async fn routes_search_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .with_breached_account_endpoint(
            "alice@example.com",
            vec![factory::mock_breach_entry("Adobe", "2013-10-04")],
            1,
        )
        .build()
        .await?;
    let app = router::routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/breaches/search/alice@example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let breaches: Vec<BreachDto> = json_body(resp).await;
    assert_eq!(breaches.len(), 1);
    test.assert_mocks();

    Ok(())
}

/// Expect the OpenAPI document to list every breach route
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = router::routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri(router::OPENAPI_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let document: serde_json::Value = json_body(resp).await;
    let paths = document["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/breaches"));
    assert!(paths.contains_key("/api/breaches/{id}"));
    assert!(paths.contains_key("/api/breaches/search/{email}"));
    assert!(paths.contains_key("/api/breaches/notify-demo"));

    Ok(())
}
