//! Breach notification emails.
//!
//! Renders the weekly digest of newly found breaches and the single breach alert from
//! `tera` templates compiled into the binary, then hands them to the injected [`Mailer`].

use serde::Serialize;
use tera::{Context, Tera};

use crate::{
    model::breach::NotificationRequestDto,
    server::{
        error::Error,
        mail::{Mailer, OutgoingMail},
        model::db::{BreachRecordModel, UserModel},
    },
};

/// Template listing every new breach of a user
pub const DIGEST_TEMPLATE: &str = "breach_digest.html";
/// Template announcing a single breach
pub const ALERT_TEMPLATE: &str = "breach_alert.html";

/// Display format of breach dates in emails
const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Compiled notification email templates.
///
/// HTML templates are autoescaped. Only the digest inserts descriptions unescaped, since
/// those are stored from the breach API as HTML.
pub struct EmailTemplates {
    tera: Tera,
}

#[derive(Serialize)]
struct DigestItem<'a> {
    title: &'a str,
    date: String,
    description: &'a str,
    logo_path: Option<&'a str>,
}

impl EmailTemplates {
    /// Compiles the built-in templates
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (
                DIGEST_TEMPLATE,
                include_str!("../../../templates/breach_digest.html"),
            ),
            (
                ALERT_TEMPLATE,
                include_str!("../../../templates/breach_alert.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Renders the digest of `records` addressed to `user`
    pub fn render_digest(
        &self,
        user: &UserModel,
        records: &[BreachRecordModel],
    ) -> Result<String, tera::Error> {
        let breaches: Vec<DigestItem> = records
            .iter()
            .map(|record| DigestItem {
                title: &record.title,
                date: record
                    .breach_date
                    .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
                    .unwrap_or_else(|| "Unknown".to_string()),
                description: record.description.as_deref().unwrap_or_default(),
                logo_path: record.logo_path.as_deref(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("user_name", &user.name);
        context.insert("breaches", &breaches);

        self.tera.render(DIGEST_TEMPLATE, &context)
    }

    /// Renders the single breach alert described by `request`
    pub fn render_alert(&self, request: &NotificationRequestDto) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("title", &request.title);
        context.insert("date", &request.date);
        context.insert("description", &request.description);
        context.insert("logo_path", &request.logo_path);

        self.tera.render(ALERT_TEMPLATE, &context)
    }
}

/// Subject line of the digest for `count` new breaches
pub fn digest_subject(count: usize) -> String {
    format!("Breach notification: {} new", count)
}

/// Subject line of the single breach alert
pub fn alert_subject(title: &str) -> String {
    format!("New breach detected: {}", title)
}

/// Service sending breach notification emails.
pub struct NotificationService<'a> {
    mailer: &'a dyn Mailer,
    templates: &'a EmailTemplates,
}

impl<'a> NotificationService<'a> {
    /// Creates a new instance of [`NotificationService`]
    pub fn new(mailer: &'a dyn Mailer, templates: &'a EmailTemplates) -> Self {
        Self { mailer, templates }
    }

    /// Emails `user` one digest listing every record in `new_records`.
    ///
    /// Nothing is sent when `new_records` is empty.
    ///
    /// # Returns
    /// - `Ok(true)` - The digest was handed to the mail transport
    /// - `Ok(false)` - No new records, nothing was sent
    /// - `Err(Error::TemplateError)` - The digest could not be rendered
    /// - `Err(Error::MailError)` - The mail transport rejected the message
    pub async fn notify(
        &self,
        user: &UserModel,
        new_records: &[BreachRecordModel],
    ) -> Result<bool, Error> {
        if new_records.is_empty() {
            tracing::info!(user_id = user.id, "No new breaches, skipping notification");

            return Ok(false);
        }

        let html_body = self.templates.render_digest(user, new_records)?;

        self.mailer
            .send(OutgoingMail {
                to: user.email.clone(),
                subject: digest_subject(new_records.len()),
                html_body,
            })
            .await?;

        tracing::info!(
            user_id = user.id,
            count = new_records.len(),
            "Sent breach notification"
        );

        Ok(true)
    }

    /// Emails a single breach alert built from `request`.
    pub async fn notify_single(&self, request: &NotificationRequestDto) -> Result<(), Error> {
        let html_body = self.templates.render_alert(request)?;

        self.mailer
            .send(OutgoingMail {
                to: request.email.clone(),
                subject: alert_subject(&request.title),
                html_body,
            })
            .await?;

        tracing::info!(title = %request.title, "Sent single breach alert");

        Ok(())
    }
}
