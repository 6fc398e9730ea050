//! Mail composition and delivery errors.

use thiserror::Error;

/// Errors raised while composing or delivering notification mail.
#[derive(Error, Debug)]
pub enum MailError {
    /// A sender or recipient address could not be parsed.
    #[error("Invalid mail address {address}: {reason}")]
    InvalidAddress {
        /// The rejected address
        address: String,
        /// Parser error
        reason: String,
    },
    /// The message could not be assembled.
    #[error("Failed to build mail message: {0}")]
    Build(#[from] lettre::error::Error),
    /// The SMTP relay rejected the message or could not be reached.
    #[error("Failed to deliver mail: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    /// Any other transport failure, used by non-SMTP mailers.
    #[error("Mail transport failure: {0}")]
    Other(String),
}
