use std::sync::Arc;

use breachwatch::server::{
    mail::MemoryMailer,
    scheduler::{run_breach_sweep, sweep::SweepSummary},
};
use breachwatch_test_utils::prelude::*;
use mockito::Matcher;

use crate::{util::RejectingMailer, TestContextExt};

/// Expect a failing lookup for one user not to stop the sweep for later users
#[tokio::test]
async fn continues_after_lookup_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .with_user("bob@example.com", true)
        .with_user("carol@example.com", true)
        .with_breached_account_endpoint(
            "alice@example.com",
            vec![factory::mock_breach_entry("Adobe", "2013-10-04")],
            1,
        )
        .with_upstream_error_endpoint("bob@example.com", 500, 1)
        .with_breached_account_endpoint(
            "carol@example.com",
            vec![factory::mock_breach_entry("LinkedIn", "2012-05-05")],
            1,
        )
        .build()
        .await?;
    let mailer = Arc::new(MemoryMailer::new());

    let summary = run_breach_sweep(test.into_app_state_with_mailer(mailer.clone()))
        .await
        .unwrap();

    assert_eq!(
        summary,
        SweepSummary {
            users: 3,
            notified: 2,
            failed: 1
        }
    );
    let recipients: Vec<String> = mailer.sent().await.into_iter().map(|m| m.to).collect();
    assert_eq!(recipients, vec!["alice@example.com", "carol@example.com"]);
    test.assert_mocks();

    Ok(())
}

/// Expect a rejected mail for one user not to stop the sweep for later users
#[tokio::test]
async fn continues_after_delivery_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .with_user("bob@example.com", true)
        .with_user("carol@example.com", true)
        .with_breached_account_endpoint(
            "alice@example.com",
            vec![factory::mock_breach_entry("Adobe", "2013-10-04")],
            1,
        )
        .with_breached_account_endpoint(
            "bob@example.com",
            vec![factory::mock_breach_entry("Adobe", "2013-10-04")],
            1,
        )
        .with_breached_account_endpoint(
            "carol@example.com",
            vec![factory::mock_breach_entry("Adobe", "2013-10-04")],
            1,
        )
        .build()
        .await?;
    let mailer = Arc::new(RejectingMailer::new("bob@example.com"));

    let summary = run_breach_sweep(test.into_app_state_with_mailer(mailer.clone()))
        .await
        .unwrap();

    assert_eq!(summary.notified, 2);
    assert_eq!(summary.failed, 1);
    let recipients: Vec<String> = mailer
        .delivered
        .sent()
        .await
        .into_iter()
        .map(|m| m.to)
        .collect();
    assert_eq!(recipients, vec!["alice@example.com", "carol@example.com"]);
    test.assert_mocks();

    Ok(())
}

/// Expect no second notification when a later sweep finds nothing new
#[tokio::test]
async fn does_not_repeat_notifications() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .with_breached_account_endpoint(
            "alice@example.com",
            vec![factory::mock_breach_entry("Adobe", "2013-10-04")],
            2,
        )
        .build()
        .await?;
    let mailer = Arc::new(MemoryMailer::new());
    let state = test.into_app_state_with_mailer(mailer.clone());

    let first = run_breach_sweep(state.clone()).await.unwrap();
    let second = run_breach_sweep(state).await.unwrap();

    assert_eq!(first.notified, 1);
    assert_eq!(second.notified, 0);
    assert_eq!(mailer.sent().await.len(), 1);
    test.assert_mocks();

    Ok(())
}

/// Expect users who opted out to be skipped entirely
#[tokio::test]
async fn skips_opted_out_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", false)
        .with_user("bob@example.com", true)
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/breachedaccount/alice@example.com")
                .match_query(Matcher::Any)
                .expect(0)
                .create()
        })
        .with_not_found_endpoint("bob@example.com", 1)
        .build()
        .await?;
    let mailer = Arc::new(MemoryMailer::new());

    let summary = run_breach_sweep(test.into_app_state_with_mailer(mailer.clone()))
        .await
        .unwrap();

    assert_eq!(
        summary,
        SweepSummary {
            users: 1,
            notified: 0,
            failed: 0
        }
    );
    assert!(mailer.sent().await.is_empty());
    test.assert_mocks();

    Ok(())
}
