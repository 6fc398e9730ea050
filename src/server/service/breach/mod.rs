//! Breach synchronization service.
//!
//! Reconciles a user's stored breach records against the breach API. Two strategies exist:
//!
//! - [`BreachService::sync_and_fetch`] trusts local records once any exist and only calls
//!   the API to populate a user without records. Users that already have records are never
//!   refreshed by this path.
//! - [`BreachService::sync_delta_only`] always calls the API and stores the entries that are
//!   not yet recorded, returning only those.
//!
//! In both strategies a breach is identified by (source name, breach date, user), and an
//! account unknown to the API is a normal outcome with no breaches.

pub mod transform;

use chrono::Utc;
use hibp_client::model::BreachEntry;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{breach::BreachRecordRepository, user::UserRepository},
    error::{breach::BreachError, Error},
    model::db::{BreachRecordModel, UserModel},
};

/// Largest page returned by [`BreachService::list_breaches`]
pub const MAX_PAGE_SIZE: u64 = 100;

/// Service for syncing and reading breach records.
pub struct BreachService<'a> {
    db: &'a DatabaseConnection,
    hibp_client: &'a hibp_client::Client,
}

impl<'a> BreachService<'a> {
    /// Creates a new instance of [`BreachService`]
    pub fn new(db: &'a DatabaseConnection, hibp_client: &'a hibp_client::Client) -> Self {
        Self { db, hibp_client }
    }

    /// Returns a user's breach records, populating them from the breach API if none exist.
    ///
    /// The API is only consulted while the user has no stored records; afterwards the local
    /// records are returned as they are.
    ///
    /// # Arguments
    /// - `email` - Email address of a registered user
    ///
    /// # Returns
    /// - `Ok(Vec<BreachRecordModel>)` - The user's breach records, possibly empty
    /// - `Err(Error::BreachError(UserNotFound))` - No user is registered with the email
    /// - `Err(Error::HibpError)` - The breach API failed for a reason other than "not found"
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn sync_and_fetch(&self, email: &str) -> Result<Vec<BreachRecordModel>, Error> {
        let user = self.get_user(email).await?;
        let breach_repo = BreachRecordRepository::new(self.db);

        let existing = breach_repo.get_by_user_id(user.id).await?;
        if !existing.is_empty() {
            tracing::debug!(
                user_id = user.id,
                count = existing.len(),
                "Returning stored breach records without querying breach API"
            );

            return Ok(existing);
        }

        let entries = self.lookup(&user.email).await?;
        self.store_new_entries(&user, entries).await?;

        Ok(breach_repo.get_by_user_id(user.id).await?)
    }

    /// Queries the breach API and stores only the breaches not yet recorded for the user.
    ///
    /// # Arguments
    /// - `email` - Email address of a registered user
    ///
    /// # Returns
    /// - `Ok(Vec<BreachRecordModel>)` - The newly stored records, empty when nothing changed
    /// - `Err(Error::BreachError(UserNotFound))` - No user is registered with the email
    /// - `Err(Error::HibpError)` - The breach API failed for a reason other than "not found"
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn sync_delta_only(&self, email: &str) -> Result<Vec<BreachRecordModel>, Error> {
        let user = self.get_user(email).await?;

        self.sync_delta_for_user(&user).await
    }

    /// Same as [`Self::sync_delta_only`] for an already resolved user.
    pub async fn sync_delta_for_user(
        &self,
        user: &UserModel,
    ) -> Result<Vec<BreachRecordModel>, Error> {
        let entries = self.lookup(&user.email).await?;

        self.store_new_entries(user, entries).await
    }

    /// Gets a single breach record by ID.
    ///
    /// # Returns
    /// - `Ok(BreachRecordModel)` - The record
    /// - `Err(Error::BreachError(RecordNotFound))` - No record has the ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_breach(&self, record_id: i32) -> Result<BreachRecordModel, Error> {
        let breach_repo = BreachRecordRepository::new(self.db);

        breach_repo
            .get_by_id(record_id)
            .await?
            .ok_or_else(|| BreachError::RecordNotFound(record_id).into())
    }

    /// Gets a page of breach records across all users, ordered by ID.
    ///
    /// `limit` defaults to and is capped at [`MAX_PAGE_SIZE`].
    pub async fn list_breaches(
        &self,
        skip: u64,
        limit: Option<u64>,
    ) -> Result<Vec<BreachRecordModel>, Error> {
        let limit = limit.unwrap_or(MAX_PAGE_SIZE).min(MAX_PAGE_SIZE);
        let breach_repo = BreachRecordRepository::new(self.db);

        Ok(breach_repo.get_paginated(skip, limit).await?)
    }

    async fn get_user(&self, email: &str) -> Result<UserModel, Error> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| BreachError::UserNotFound(email.to_string()).into())
    }

    /// Fetches breaches for an account, treating an account unknown to the API as having none
    async fn lookup(&self, email: &str) -> Result<Vec<BreachEntry>, Error> {
        match self.hibp_client.breached_account(email).await {
            Ok(entries) => Ok(entries),
            Err(hibp_client::Error::NotFound) => {
                tracing::debug!(%email, "Breach API reports no breaches for account");

                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Stores every entry not already recorded for the user and returns the stored records.
    ///
    /// Entries are checked one at a time, so duplicates within a single response are
    /// stored once.
    async fn store_new_entries(
        &self,
        user: &UserModel,
        entries: Vec<BreachEntry>,
    ) -> Result<Vec<BreachRecordModel>, Error> {
        let breach_repo = BreachRecordRepository::new(self.db);
        let now = Utc::now().naive_utc();
        let mut created = Vec::new();

        for entry in entries {
            let record = transform::breach_entry_to_record(entry, user.id, now);

            if breach_repo
                .find_by_natural_key(user.id, &record.name, record.breach_date)
                .await?
                .is_some()
            {
                tracing::debug!(
                    user_id = user.id,
                    name = %record.name,
                    "Skipping breach already recorded for user"
                );

                continue;
            }

            let name = record.name.clone();
            let stored = breach_repo
                .create(record)
                .await
                .map_err(|e| insert_error(e, name, user.id))?;

            created.push(stored);
        }

        if !created.is_empty() {
            tracing::info!(
                user_id = user.id,
                count = created.len(),
                "Stored new breach records"
            );
        }

        Ok(created)
    }
}

fn insert_error(err: DbErr, name: String, user_id: i32) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            BreachError::Conflict { name, user_id }.into()
        }
        _ => err.into(),
    }
}
