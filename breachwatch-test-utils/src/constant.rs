//! Breach API client settings used by every test context.

/// Subscription key sent to the mock server. Not a real credential.
pub static TEST_API_KEY: &str = "test-api-key";

/// User agent sent to the mock server.
pub static TEST_USER_AGENT: &str = "Breachwatch Test";
