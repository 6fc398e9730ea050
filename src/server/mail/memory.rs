//! In-memory mail transport.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::server::{
    error::mail::MailError,
    mail::{Mailer, OutgoingMail},
};

/// Messages kept by [`MemoryMailer::new`] before the oldest are dropped
pub const DEFAULT_OUTBOX_CAPACITY: usize = 1000;

/// Keeps the most recent messages in memory instead of delivering them.
///
/// Used when no SMTP relay is configured and as the transport in tests. The outbox holds
/// at most `capacity` messages; older ones are discarded.
pub struct MemoryMailer {
    outbox: Mutex<VecDeque<OutgoingMail>>,
    capacity: usize,
}

impl MemoryMailer {
    /// Creates a new instance of [`MemoryMailer`] holding [`DEFAULT_OUTBOX_CAPACITY`] messages
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_OUTBOX_CAPACITY)
    }

    /// Creates a new instance of [`MemoryMailer`] holding at most `capacity` messages
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outbox: Mutex::new(VecDeque::new()),
            capacity,
        }
    }

    /// Returns a copy of the retained messages, oldest first
    pub async fn sent(&self) -> Vec<OutgoingMail> {
        self.outbox.lock().await.iter().cloned().collect()
    }
}

impl Default for MemoryMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        tracing::debug!(to = %mail.to, subject = %mail.subject, "Stored outgoing mail in memory");

        let mut outbox = self.outbox.lock().await;
        if self.capacity == 0 {
            return Ok(());
        }
        while outbox.len() >= self.capacity {
            outbox.pop_front();
        }
        outbox.push_back(mail);

        Ok(())
    }
}
