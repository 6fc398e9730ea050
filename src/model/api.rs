//! Generic response bodies shared by every route.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for API requests that complete without returning a resource
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    /// Human readable outcome of the request
    pub message: String,
}
