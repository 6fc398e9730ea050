//! Data transfer objects returned by the HTTP API.

pub mod api;
pub mod breach;
