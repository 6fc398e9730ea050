//! Tests for the notify_demo endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use breachwatch::{
    model::{api::MessageDto, breach::NotificationRequestDto},
    server::{controller::breach::notify_demo, mail::MemoryMailer},
};

use super::*;
use crate::util::RejectingMailer;

fn request(email: &str) -> NotificationRequestDto {
    NotificationRequestDto {
        email: email.to_string(),
        title: "Adobe".to_string(),
        date: "2013-10-04".to_string(),
        description: "<p>Adobe was breached.</p>".to_string(),
        logo_path: "https://haveibeenpwned.com/Content/Images/PwnedLogos/Adobe.png".to_string(),
    }
}

/// Expect 200 and a single alert mail
#[tokio::test]
async fn sends_alert() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mailer = Arc::new(MemoryMailer::new());

    let result = notify_demo(
        State(test.into_app_state_with_mailer(mailer.clone())),
        Json(request("alice@example.com")),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: MessageDto = json_body(resp).await;
    assert_eq!(body.message, "Email sent");

    let sent = mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "alice@example.com");
    assert_eq!(sent[0].subject, "New breach detected: Adobe");

    Ok(())
}

/// Expect 500 when the mail transport fails
#[tokio::test]
async fn fails_when_delivery_fails() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mailer = Arc::new(RejectingMailer::new("alice@example.com"));

    let result = notify_demo(
        State(test.into_app_state_with_mailer(mailer)),
        Json(request("alice@example.com")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
