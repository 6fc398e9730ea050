//! SMTP mail transport built on lettre.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{
    config::Config,
    error::mail::MailError,
    mail::{Mailer, OutgoingMail},
};

/// Delivers mail through an SMTP relay, upgrading the connection with STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Creates a new instance of [`SmtpMailer`] for the relay described by `config`.
    ///
    /// The SMTP username doubles as the sender address, shown with the configured
    /// display name.
    pub fn new(config: &Config) -> Result<Self, MailError> {
        let credentials =
            Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        let from = Mailbox::new(
            Some(config.mail_from_name.clone()),
            parse_address(&config.smtp_username)?,
        );

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(Mailbox::new(None, parse_address(&mail.to)?))
            .subject(mail.subject)
            .header(ContentType::TEXT_HTML)
            .body(mail.html_body)?;

        self.transport.send(message).await?;

        Ok(())
    }
}

fn parse_address(address: &str) -> Result<lettre::Address, MailError> {
    address.parse().map_err(|e: lettre::address::AddressError| MailError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}
