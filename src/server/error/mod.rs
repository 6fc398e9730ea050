//! Error types for the breach monitoring server.
//!
//! Domain errors (configuration, breach lookups, mail delivery) live in their own modules
//! and are aggregated, together with errors from external libraries, into the [`Error`]
//! type. [`Error::status_code`] is the single table translating every failure kind into an
//! HTTP status, and the `IntoResponse` implementation builds the JSON error body from it.

pub mod breach;
pub mod config;
pub mod mail;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{breach::BreachError, config::ConfigError, mail::MailError},
};

/// Main error type for the server application.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts underlying errors
/// automatically. Converted into an HTTP response through [`Error::status_code`].
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Breach lookup error against local state (unknown user or record, duplicates).
    #[error(transparent)]
    BreachError(#[from] BreachError),
    /// Mail composition or delivery error.
    #[error(transparent)]
    MailError(#[from] MailError),
    /// Breach API error (not found, upstream status, transport, decode).
    #[error(transparent)]
    HibpError(#[from] hibp_client::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Email template error (template parsing or rendering).
    #[error(transparent)]
    TemplateError(#[from] tera::Error),
}

impl Error {
    /// Maps the error to the HTTP status it is reported with.
    ///
    /// # Returns
    /// - 404 Not Found - Account without breaches upstream, unknown user, record or empty page
    /// - 409 Conflict - Duplicate breach record refused by the store
    /// - 429 Too Many Requests - Breach API rate limit exceeded
    /// - 503 Service Unavailable - Breach API unreachable or failing with a 5xx status
    /// - 500 Internal Server Error - Everything else
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BreachError(err) => err.status_code(),
            Self::HibpError(err) => match err {
                hibp_client::Error::NotFound => StatusCode::NOT_FOUND,
                hibp_client::Error::Upstream { status: 429, .. } => StatusCode::TOO_MANY_REQUESTS,
                hibp_client::Error::Upstream { status, .. } if *status >= 500 => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                hibp_client::Error::Transport(_) => StatusCode::SERVICE_UNAVAILABLE,
                hibp_client::Error::Upstream { .. }
                | hibp_client::Error::Decode(_)
                | hibp_client::Error::InvalidUrl(_)
                | hibp_client::Error::MissingApiKey
                | hibp_client::Error::Build(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::ConfigError(_)
            | Self::MailError(_)
            | Self::DbErr(_)
            | Self::SchedulerError(_)
            | Self::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Client errors carry the error message in the body. Upstream outages are logged at warn
/// level and reported with their message, everything mapped to 500 is logged and replaced
/// with a generic message.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            return InternalServerError(self).into_response();
        }

        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("{}", self);
        }

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
