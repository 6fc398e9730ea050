//! Construction of the server's collaborators at startup.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::{Config, MailTransport},
    error::Error,
    mail::{Mailer, MemoryMailer, SmtpMailer},
};

/// Build and configure the breach API client with the provided credentials
pub fn build_hibp_client(config: &Config) -> Result<hibp_client::Client, Error> {
    let mut builder = hibp_client::Client::builder()
        .api_key(&config.hibp_api_key)
        .user_agent(&config.hibp_user_agent)
        .timeout(config.hibp_timeout);

    if let Some(base_url) = &config.hibp_api_url {
        let hibp_config = hibp_client::Config::builder().base_url(base_url).build()?;
        builder = builder.config(hibp_config);
    }

    Ok(builder.build()?)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the mail transport selected by the configuration
pub fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>, Error> {
    let mailer: Arc<dyn Mailer> = match config.mail_transport {
        MailTransport::Smtp => Arc::new(SmtpMailer::new(config)?),
        MailTransport::Memory => {
            tracing::warn!(
                "Using the in-memory mail transport, notifications will not be delivered"
            );
            Arc::new(MemoryMailer::new())
        }
    };

    Ok(mailer)
}
