//! HTTP controller endpoints for the breach API.
//!
//! Axum handlers resolve their collaborators from
//! [`AppState`](crate::server::model::app::AppState), call into the service layer and return
//! JSON responses. Errors are converted to responses
//! by [`Error`](crate::server::error::Error). Every handler carries a utoipa annotation so it
//! appears in the OpenAPI document.

pub mod breach;
