//! Weekly breach notification sweep.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::Error,
    mail::Mailer,
    model::db::UserModel,
    service::{
        breach::BreachService,
        notification::{EmailTemplates, NotificationService},
    },
};

/// Outcome of a single sweep run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    /// Opted-in users processed
    pub users: usize,
    /// Users that were sent a notification
    pub notified: usize,
    /// Users whose sync or notification failed
    pub failed: usize,
}

/// Syncs new breaches for every opted-in user and notifies them.
///
/// Users are processed one after another, so at most one request to the breach API and
/// one mail delivery are in flight at any time. A failure while processing a user is
/// logged and counted, and the sweep moves on to the next user.
pub struct BreachSweep<'a> {
    db: &'a DatabaseConnection,
    hibp_client: &'a hibp_client::Client,
    mailer: &'a dyn Mailer,
    templates: &'a EmailTemplates,
}

impl<'a> BreachSweep<'a> {
    /// Creates a new instance of [`BreachSweep`]
    pub fn new(
        db: &'a DatabaseConnection,
        hibp_client: &'a hibp_client::Client,
        mailer: &'a dyn Mailer,
        templates: &'a EmailTemplates,
    ) -> Self {
        Self {
            db,
            hibp_client,
            mailer,
            templates,
        }
    }

    /// Runs the sweep over every user opted in to notifications.
    ///
    /// # Returns
    /// - `Ok(SweepSummary)` - Every opted-in user was processed, some possibly with failures
    /// - `Err(Error::DbErr)` - The opted-in users could not be loaded
    pub async fn run(&self) -> Result<SweepSummary, Error> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_notification_enabled().await?;

        let mut summary = SweepSummary {
            users: users.len(),
            ..Default::default()
        };

        if users.is_empty() {
            tracing::info!("No users opted in to breach notifications");

            return Ok(summary);
        }

        for user in &users {
            match self.process_user(user).await {
                Ok(true) => summary.notified += 1,
                Ok(false) => {}
                Err(e) => {
                    summary.failed += 1;

                    tracing::error!(
                        user_id = user.id,
                        email = %user.email,
                        "Failed to process breach notification: {}",
                        e
                    );
                }
            }
        }

        Ok(summary)
    }

    async fn process_user(&self, user: &UserModel) -> Result<bool, Error> {
        let breach_service = BreachService::new(self.db, self.hibp_client);
        let notification_service = NotificationService::new(self.mailer, self.templates);

        let new_records = breach_service.sync_delta_for_user(user).await?;

        notification_service.notify(user, &new_records).await
    }
}
