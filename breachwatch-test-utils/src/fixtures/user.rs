use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user named after the local part of `email`.
    pub async fn insert_user(
        &self,
        email: &str,
        notifications_enabled: bool,
    ) -> Result<entity::breach_user::Model, TestError> {
        let name = email.split('@').next().unwrap_or(email).to_string();

        Ok(
            entity::prelude::BreachUser::insert(entity::breach_user::ActiveModel {
                name: ActiveValue::Set(name),
                email: ActiveValue::Set(email.to_string()),
                notifications_enabled: ActiveValue::Set(notifications_enabled),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
