//! Outgoing mail transports.
//!
//! Services hand finished messages to a [`Mailer`]; which transport actually delivers them
//! is decided once at startup and injected as `Arc<dyn Mailer>`.

pub mod memory;
pub mod smtp;

use async_trait::async_trait;

use crate::server::error::mail::MailError;

pub use memory::MemoryMailer;
pub use smtp::SmtpMailer;

/// A rendered HTML email ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html_body: String,
}

/// Delivers outgoing mail.
///
/// Delivery is reported synchronously and never retried; callers decide whether a failure
/// is fatal.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends a single message.
    ///
    /// # Returns
    /// - `Ok(())` - The transport accepted the message
    /// - `Err(MailError)` - The message could not be built or the transport rejected it
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}
