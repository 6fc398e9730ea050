//! Helpers turning a [`TestContext`] into the server's [`AppState`].

use std::sync::Arc;

use async_trait::async_trait;
use breachwatch::server::{
    error::mail::MailError,
    mail::{Mailer, MemoryMailer, OutgoingMail},
    model::app::AppState,
    service::notification::EmailTemplates,
};
use breachwatch_test_utils::TestContext;

/// Extension trait for TestContext to create AppState with an in-memory mailer
pub trait TestContextExt {
    /// Builds an AppState delivering mail to a fresh [`MemoryMailer`]
    fn into_app_state(&self) -> AppState;

    /// Builds an AppState delivering mail to `mailer`
    fn into_app_state_with_mailer(&self, mailer: Arc<dyn Mailer>) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.into_app_state_with_mailer(Arc::new(MemoryMailer::new()))
    }

    fn into_app_state_with_mailer(&self, mailer: Arc<dyn Mailer>) -> AppState {
        AppState {
            db: self.db.clone(),
            hibp_client: self.hibp_client.clone(),
            mailer,
            templates: Arc::new(EmailTemplates::new().unwrap()),
        }
    }
}

/// Mailer rejecting every message addressed to `reject`, recording the rest.
pub struct RejectingMailer {
    pub reject: String,
    pub delivered: MemoryMailer,
}

impl RejectingMailer {
    pub fn new(reject: &str) -> Self {
        Self {
            reject: reject.to_string(),
            delivered: MemoryMailer::new(),
        }
    }
}

#[async_trait]
impl Mailer for RejectingMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        if mail.to == self.reject {
            return Err(MailError::Other(format!("mailbox {} unavailable", mail.to)));
        }

        self.delivered.send(mail).await
    }
}
