//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for the registered users and their breach records.
//! They return `DbErr` directly and leave business rules to the service layer.

pub mod breach;
pub mod user;
