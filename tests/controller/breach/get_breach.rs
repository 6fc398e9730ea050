//! Tests for the get_breach endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use breachwatch::{model::breach::BreachDto, server::controller::breach::get_breach};

use super::*;

/// Expect 200 with the record
#[tokio::test]
async fn returns_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .build()
        .await?;
    let record = test
        .breach()
        .insert_breach_record(1, "Adobe", factory::breach_date("2013-10-04"))
        .await?;

    let result = get_breach(State(test.into_app_state()), Path(record.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let breach: BreachDto = json_body(resp).await;
    assert_eq!(breach.id, record.id);
    assert_eq!(breach.breach_date, record.breach_date);

    Ok(())
}

/// Expect 404 for an unknown ID
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_breach_tables().build().await?;

    let result = get_breach(State(test.into_app_state()), Path(42)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
