use std::sync::Arc;

use breachwatch::server::{
    config::Config,
    model::app::AppState,
    router,
    scheduler::Scheduler,
    service::notification::EmailTemplates,
    startup,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "breachwatch=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let hibp_client = startup::build_hibp_client(&config)?;
    let db = startup::connect_to_database(&config).await?;
    let mailer = startup::build_mailer(&config)?;
    let templates = Arc::new(EmailTemplates::new()?);

    let state = AppState {
        db,
        hibp_client,
        mailer,
        templates,
    };

    let _scheduler = Scheduler::new(state.clone())
        .await?
        .start(&config.sweep_cron, config.sweep_timezone)
        .await?;

    tracing::info!(
        cron = %config.sweep_cron,
        timezone = %config.sweep_timezone,
        "Scheduled breach notification sweep"
    );

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router::routes().with_state(state)).await?;

    Ok(())
}
