//! Application state shared by the HTTP handlers and the scheduler.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{mail::Mailer, service::notification::EmailTemplates};

/// State shared by every request handler and the scheduled sweep.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Breach API client
    pub hibp_client: hibp_client::Client,
    /// Outgoing mail transport
    pub mailer: Arc<dyn Mailer>,
    /// Compiled notification email templates
    pub templates: Arc<EmailTemplates>,
}
