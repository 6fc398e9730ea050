//! Breach record fixtures, upstream entry factories and breach API mock endpoints.

pub mod factory;
pub mod mockito;

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn breach(&self) -> BreachFixtures<'_> {
        BreachFixtures { setup: self }
    }
}

pub struct BreachFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> BreachFixtures<'a> {
    /// Insert a stored breach record for `user_id`.
    ///
    /// The title equals `name`; the remaining fields hold placeholder data.
    pub async fn insert_breach_record(
        &self,
        user_id: i32,
        name: &str,
        breach_date: Option<NaiveDate>,
    ) -> Result<entity::breach_record::Model, TestError> {
        Ok(
            entity::prelude::BreachRecord::insert(entity::breach_record::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                title: ActiveValue::Set(name.to_string()),
                domain: ActiveValue::Set(format!("{}.com", name.to_lowercase())),
                breach_date: ActiveValue::Set(breach_date),
                added_at: ActiveValue::Set(Utc::now().naive_utc()),
                modified_at: ActiveValue::Set(None),
                pwn_count: ActiveValue::Set(1000),
                description: ActiveValue::Set(Some(format!("<p>{} was breached.</p>", name))),
                logo_path: ActiveValue::Set(None),
                data_classes: ActiveValue::Set(
                    vec!["Email addresses".to_string(), "Passwords".to_string()].into(),
                ),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
