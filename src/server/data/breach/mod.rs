//! Repository for stored breach records.

use chrono::{NaiveDate, NaiveDateTime};
use entity::breach_record::DataClasses;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Field values of a breach record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBreachRecord {
    /// Owning user
    pub user_id: i32,
    /// Upstream source name, part of the dedup key
    pub name: String,
    /// Display title
    pub title: String,
    /// Domain of the breached service, empty when unknown
    pub domain: String,
    /// Date the breach occurred, part of the dedup key
    pub breach_date: Option<NaiveDate>,
    /// When the record is stored
    pub added_at: NaiveDateTime,
    /// Last upstream modification
    pub modified_at: Option<NaiveDateTime>,
    /// Number of affected accounts
    pub pwn_count: i64,
    /// HTML description from the breach API
    pub description: Option<String>,
    /// URL of the breach logo
    pub logo_path: Option<String>,
    /// Categories of exposed data
    pub data_classes: Vec<String>,
}

/// Queries and inserts for the `breach_record` table.
pub struct BreachRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BreachRecordRepository<'a, C> {
    /// Creates a new instance of [`BreachRecordRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a breach record for its user
    pub async fn create(
        &self,
        record: NewBreachRecord,
    ) -> Result<entity::breach_record::Model, DbErr> {
        let record = entity::breach_record::ActiveModel {
            user_id: ActiveValue::Set(record.user_id),
            name: ActiveValue::Set(record.name),
            title: ActiveValue::Set(record.title),
            domain: ActiveValue::Set(record.domain),
            breach_date: ActiveValue::Set(record.breach_date),
            added_at: ActiveValue::Set(record.added_at),
            modified_at: ActiveValue::Set(record.modified_at),
            pwn_count: ActiveValue::Set(record.pwn_count),
            description: ActiveValue::Set(record.description),
            logo_path: ActiveValue::Set(record.logo_path),
            data_classes: ActiveValue::Set(DataClasses::from(record.data_classes)),
            ..Default::default()
        };

        record.insert(self.db).await
    }

    /// Gets every breach record of a user, oldest first
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::breach_record::Model>, DbErr> {
        entity::prelude::BreachRecord::find()
            .filter(entity::breach_record::Column::UserId.eq(user_id))
            .order_by_asc(entity::breach_record::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a user's breach record by source name and breach date
    ///
    /// A `None` breach date only matches records stored without one.
    pub async fn find_by_natural_key(
        &self,
        user_id: i32,
        name: &str,
        breach_date: Option<NaiveDate>,
    ) -> Result<Option<entity::breach_record::Model>, DbErr> {
        let date_condition = match breach_date {
            Some(date) => entity::breach_record::Column::BreachDate.eq(date),
            None => entity::breach_record::Column::BreachDate.is_null(),
        };

        entity::prelude::BreachRecord::find()
            .filter(entity::breach_record::Column::UserId.eq(user_id))
            .filter(entity::breach_record::Column::Name.eq(name))
            .filter(date_condition)
            .one(self.db)
            .await
    }

    /// Gets a breach record by its ID
    pub async fn get_by_id(
        &self,
        record_id: i32,
    ) -> Result<Option<entity::breach_record::Model>, DbErr> {
        entity::prelude::BreachRecord::find_by_id(record_id)
            .one(self.db)
            .await
    }

    /// Gets a page of breach records across all users, ordered by ID
    pub async fn get_paginated(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<entity::breach_record::Model>, DbErr> {
        entity::prelude::BreachRecord::find()
            .order_by_asc(entity::breach_record::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await
    }
}
