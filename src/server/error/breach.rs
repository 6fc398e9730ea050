//! Breach lookup errors against local state.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors raised by breach lookups against local state.
#[derive(Error, Debug)]
pub enum BreachError {
    /// No registered user has the requested email address.
    #[error("No user registered with email {0}")]
    UserNotFound(String),
    /// No breach record exists with the requested ID.
    #[error("Breach record ID {0} not found")]
    RecordNotFound(i32),
    /// The requested page of breach records is empty.
    #[error("No breach records found")]
    NoRecordsFound,
    /// The store refused a breach record because it already holds one with the
    /// same source name and breach date for the user.
    #[error("Breach {name} is already recorded for user ID {user_id}")]
    Conflict {
        /// Source name of the breach
        name: String,
        /// ID of the user the breach belongs to
        user_id: i32,
    },
}

impl BreachError {
    /// HTTP status the error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UserNotFound(_) | Self::RecordNotFound(_) | Self::NoRecordsFound => {
                StatusCode::NOT_FOUND
            }
            Self::Conflict { .. } => StatusCode::CONFLICT,
        }
    }
}
