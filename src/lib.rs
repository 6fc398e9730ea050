//! Breach monitoring service.
//!
//! Keeps a per-user record of the data breaches their email address appears in, syncing
//! against the Have I Been Pwned API, and emails opted-in users a weekly digest of newly
//! discovered breaches.

pub mod model;
pub mod server;
