//! Breach API mock endpoint creation utilities.
//!
//! Every endpoint mocks `GET /breachedaccount/{email}?truncateResponse=false` and verifies
//! it was called exactly `expected_requests` times.

use hibp_client::model::BreachEntry;
use mockito::{Matcher, Mock};

use crate::TestContext;

impl TestContext {
    fn breached_account_mock(&mut self, email: &str) -> Mock {
        let url = format!("/breachedaccount/{}", email);

        self.server
            .mock("GET", url.as_str())
            .match_query(Matcher::UrlEncoded(
                "truncateResponse".to_string(),
                "false".to_string(),
            ))
    }

    /// Create a mock endpoint returning `entries` for `email`.
    pub(crate) fn create_breached_account_endpoint(
        &mut self,
        email: &str,
        entries: Vec<BreachEntry>,
        expected_requests: usize,
    ) -> Mock {
        self.breached_account_mock(email)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&entries).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering 404, the account has no known breaches.
    pub(crate) fn create_not_found_endpoint(
        &mut self,
        email: &str,
        expected_requests: usize,
    ) -> Mock {
        self.breached_account_mock(email)
            .with_status(404)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint failing with `status`.
    pub(crate) fn create_upstream_error_endpoint(
        &mut self,
        email: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.breached_account_mock(email)
            .with_status(status)
            .with_body("upstream failure")
            .expect(expected_requests)
            .create()
    }
}
