//! Declarative test builder.
//!
//! The builder collects tables, users and mock endpoints; all of them are created in the
//! final `build()` call.

use hibp_client::model::BreachEntry;
use mockito::Mock;
use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a complete
/// test setup.
pub struct TestBuilder {
    // Tables to create
    include_breach_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, bool)>, // (email, notifications_enabled)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    breached_account_endpoints: Vec<(String, Vec<BreachEntry>, usize)>,
    not_found_endpoints: Vec<(String, usize)>,
    upstream_error_endpoints: Vec<(String, usize, usize)>, // (email, status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            include_breach_tables: false,
            users: Vec::new(),
            mock_builders: Vec::new(),
            breached_account_endpoints: Vec::new(),
            not_found_endpoints: Vec::new(),
            upstream_error_endpoints: Vec::new(),
        }
    }

    /// Add the user and breach record tables to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_breach_tables(mut self) -> Self {
        self.include_breach_tables = true;
        self
    }

    /// Insert a registered user into the database.
    ///
    /// Users are inserted in call order, so the first user gets ID 1.
    ///
    /// # Arguments
    /// - `email` - Email address of the user, its local part becomes the user's name
    /// - `notifications_enabled` - Whether the user receives the weekly digest
    pub fn with_user(mut self, email: &str, notifications_enabled: bool) -> Self {
        self.users.push((email.to_string(), notifications_enabled));
        self
    }

    /// Add a breached account endpoint returning `entries` for `email`.
    ///
    /// # Arguments
    /// - `email` - Account the endpoint answers for
    /// - `entries` - Breach entries returned as JSON
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_breached_account_endpoint(
        mut self,
        email: &str,
        entries: Vec<BreachEntry>,
        expected_requests: usize,
    ) -> Self {
        self.breached_account_endpoints
            .push((email.to_string(), entries, expected_requests));
        self
    }

    /// Add a breached account endpoint answering 404 for `email`.
    pub fn with_not_found_endpoint(mut self, email: &str, expected_requests: usize) -> Self {
        self.not_found_endpoints
            .push((email.to_string(), expected_requests));
        self
    }

    /// Add a breached account endpoint failing with `status` for `email`.
    pub fn with_upstream_error_endpoint(
        mut self,
        email: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.upstream_error_endpoints
            .push((email.to_string(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (breach tables if specified)
    /// 2. Inserts users
    /// 3. Creates mock HTTP endpoints (custom endpoints first)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::HibpError)` - Breach API client initialization failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_breach_tables {
            // Records reference users, so users come first
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::BreachUser),
                schema.create_table_from_entity(entity::prelude::BreachRecord),
            ]);
        }

        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for (email, notifications_enabled) in &self.users {
            setup
                .user()
                .insert_user(email, *notifications_enabled)
                .await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (email, entries, expected) in self.breached_account_endpoints {
            mocks.push(setup.create_breached_account_endpoint(&email, entries, expected));
        }

        for (email, expected) in self.not_found_endpoints {
            mocks.push(setup.create_not_found_endpoint(&email, expected));
        }

        for (email, status, expected) in self.upstream_error_endpoints {
            mocks.push(setup.create_upstream_error_endpoint(&email, status, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
