use super::*;

/// Expect a duplicated upstream entry to be persisted once
#[tokio::test]
async fn stores_duplicate_entry_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .with_breached_account_endpoint(
            "alice@example.com",
            vec![
                factory::mock_breach_entry("Adobe", "2013-10-04"),
                factory::mock_breach_entry("Adobe", "2013-10-04"),
            ],
            1,
        )
        .build()
        .await?;
    let breach_service = BreachService::new(&test.db, &test.hibp_client);

    let records = breach_service
        .sync_and_fetch("alice@example.com")
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Adobe");
    assert_eq!(records[0].breach_date, factory::breach_date("2013-10-04"));
    assert_eq!(BreachRecord::find().count(&test.db).await?, 1);
    test.assert_mocks();

    Ok(())
}

/// Expect the breach API to be queried once; later calls serve the stored records
#[tokio::test]
async fn queries_api_only_for_user_without_records() -> Result<(), TestError> {
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
    let breach_service = BreachService::new(&test.db, &test.hibp_client);

    let first = breach_service
        .sync_and_fetch("alice@example.com")
        .await
        .unwrap();
    let second = breach_service
        .sync_and_fetch("alice@example.com")
        .await
        .unwrap();

    assert_eq!(first, second);
    test.assert_mocks();

    Ok(())
}

/// Expect an account unknown upstream to leave the store untouched
#[tokio::test]
async fn stores_nothing_for_unknown_account() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_breach_tables()
        .with_user("alice@example.com", true)
        .with_not_found_endpoint("alice@example.com", 1)
        .build()
        .await?;
    let breach_service = BreachService::new(&test.db, &test.hibp_client);

    let records = breach_service
        .sync_and_fetch("alice@example.com")
        .await
        .unwrap();

    assert!(records.is_empty());
    assert_eq!(BreachRecord::find().count(&test.db).await?, 0);
    test.assert_mocks();

    Ok(())
}
