//! Runtime configuration loaded from environment variables.

use std::{net::SocketAddr, str::FromStr, time::Duration};

use chrono_tz::Tz;

use crate::server::{error::config::ConfigError, scheduler::config::sweep};

/// Default SMTP relay used for outgoing notification mail
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
/// Default SMTP submission port, upgraded with STARTTLS
pub const DEFAULT_SMTP_PORT: u16 = 587;
/// Display name used in the `From` header when none is configured
pub const DEFAULT_MAIL_FROM_NAME: &str = "Breachwatch";
/// Address the HTTP server binds to when none is configured
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Which transport delivers outgoing mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailTransport {
    /// Deliver through the configured SMTP relay
    Smtp,
    /// Keep messages in memory, used for local runs without a relay
    Memory,
}

impl FromStr for MailTransport {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "smtp" => Ok(Self::Smtp),
            "memory" => Ok(Self::Memory),
            other => Err(format!("expected `smtp` or `memory`, got `{}`", other)),
        }
    }
}

/// Application configuration.
pub struct Config {
    /// Database connection string
    pub database_url: String,
    /// Have I Been Pwned subscription key
    pub hibp_api_key: String,
    /// Override for the breach API base URL, mainly for staging
    pub hibp_api_url: Option<String>,
    /// User agent sent to the breach API
    pub hibp_user_agent: String,
    /// Per-request timeout for the breach API
    pub hibp_timeout: Duration,
    /// Outgoing mail transport
    pub mail_transport: MailTransport,
    /// SMTP relay host
    pub smtp_host: String,
    /// SMTP relay port
    pub smtp_port: u16,
    /// SMTP login, also used as the sender address
    pub smtp_username: String,
    /// SMTP password
    pub smtp_password: String,
    /// Display name of the sender
    pub mail_from_name: String,
    /// Cron expression of the weekly notification sweep
    pub sweep_cron: String,
    /// Timezone the sweep cron expression is evaluated in
    pub sweep_timezone: Tz,
    /// Address the HTTP server binds to
    pub bind_address: SocketAddr,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set to a value that can't be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let required =
            |key: &str| var(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let mail_transport: MailTransport = parse_or(&var, "MAIL_TRANSPORT", MailTransport::Smtp)?;

        // Credentials are only needed when mail actually leaves the process
        let (smtp_username, smtp_password) = match mail_transport {
            MailTransport::Smtp => (required("SMTP_USERNAME")?, required("SMTP_PASSWORD")?),
            MailTransport::Memory => (
                var("SMTP_USERNAME").unwrap_or_else(|| "breachwatch@localhost".to_string()),
                var("SMTP_PASSWORD").unwrap_or_default(),
            ),
        };

        let hibp_timeout_secs: u64 = parse_or(
            &var,
            "HIBP_TIMEOUT_SECS",
            hibp_client::DEFAULT_TIMEOUT.as_secs(),
        )?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            hibp_api_key: required("HIBP_API_KEY")?,
            hibp_api_url: var("HIBP_API_URL"),
            hibp_user_agent: var("HIBP_USER_AGENT")
                .unwrap_or_else(|| hibp_client::DEFAULT_USER_AGENT.to_string()),
            hibp_timeout: Duration::from_secs(hibp_timeout_secs),
            mail_transport,
            smtp_host: var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: parse_or(&var, "SMTP_PORT", DEFAULT_SMTP_PORT)?,
            smtp_username,
            smtp_password,
            mail_from_name: var("MAIL_FROM_NAME")
                .unwrap_or_else(|| DEFAULT_MAIL_FROM_NAME.to_string()),
            sweep_cron: var("SWEEP_CRON").unwrap_or_else(|| sweep::CRON_EXPRESSION.to_string()),
            sweep_timezone: parse_or(&var, "SWEEP_TIMEZONE", sweep::TIMEZONE)?,
            bind_address: match var("BIND_ADDRESS") {
                Some(value) => parse_value("BIND_ADDRESS", &value)?,
                None => parse_value("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?,
            },
        })
    }
}

fn parse_or<T, F>(var: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(value) => parse_value(key, &value),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
        var: key.to_string(),
        reason: e.to_string(),
    })
}
