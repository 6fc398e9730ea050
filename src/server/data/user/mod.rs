//! Repository for registered users.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Queries and updates for the `breach_user` table.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        notifications_enabled: bool,
    ) -> Result<entity::breach_user::Model, DbErr> {
        let user = entity::breach_user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            notifications_enabled: ActiveValue::Set(notifications_enabled),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Finds the user registered with `email`
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::breach_user::Model>, DbErr> {
        entity::prelude::BreachUser::find()
            .filter(entity::breach_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets every user opted in to breach notifications, in registration order
    pub async fn get_notification_enabled(
        &self,
    ) -> Result<Vec<entity::breach_user::Model>, DbErr> {
        entity::prelude::BreachUser::find()
            .filter(entity::breach_user::Column::NotificationsEnabled.eq(true))
            .order_by_asc(entity::breach_user::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates a user's notification opt-in
    ///
    /// Returns `Ok(None)` if the user does not exist.
    pub async fn set_notifications_enabled(
        &self,
        user_id: i32,
        enabled: bool,
    ) -> Result<Option<entity::breach_user::Model>, DbErr> {
        let user = match entity::prelude::BreachUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.notifications_enabled = ActiveValue::Set(enabled);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
