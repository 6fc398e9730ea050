use thiserror::Error;

/// Errors returned by the breach API [`Client`](crate::Client).
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered `404`, the account is not present in any known breach.
    #[error("No breaches found for the requested account")]
    NotFound,
    /// The API answered with a non-success status other than `404`.
    ///
    /// The raw body is kept so operators can see what the upstream reported
    /// (invalid API key, rate limit details, outage notices).
    #[error("Breach API responded with status {status}: {body}")]
    Upstream { status: u16, body: String },
    /// The request never completed (timeout, connection refused, DNS failure).
    #[error("Failed to reach breach API: {0}")]
    Transport(#[source] reqwest::Error),
    /// The API answered with a body that is not the expected JSON document.
    #[error("Failed to decode breach API response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Invalid breach API URL: {0}")]
    InvalidUrl(String),
    #[error("A breach API key is required to build the client")]
    MissingApiKey,
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl Error {
    /// Returns true when the account simply has no known breaches
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
