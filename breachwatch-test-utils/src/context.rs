//! Test context structure and utilities.
//!
//! The context returned by `TestBuilder` owns an in-memory SQLite database, the mock breach
//! API server and a client configured to talk to it.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    constant::{TEST_API_KEY, TEST_USER_AGENT},
    error::TestError,
};

/// Test context structure returned by `TestBuilder`
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_breach_tables().build().await?;
///
/// let user = test.user().insert_user("alice@example.com", true).await?;
/// test.breach().insert_breach_record(user.id, "Adobe", None).await?;
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Breach API client configured to use the mock server
    pub hibp_client: hibp_client::Client,

    /// Mock HTTP server for breach API endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::HibpError)` - Client or config builder failed
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let hibp_config = hibp_client::Config::builder()
            .base_url(&mock_server.url())
            .build()?;

        let hibp_client = hibp_client::Client::builder()
            .config(hibp_config)
            .api_key(TEST_API_KEY)
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            server: mock_server,
            db,
            hibp_client,
            mocks: Vec::new(),
        })
    }

    /// Create database tables from schema statements, in order.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
