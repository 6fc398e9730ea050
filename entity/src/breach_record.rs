//! A breach found for a registered user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category labels describing the data exposed by a breach, e.g. "Passwords".
///
/// Stored as a JSON array so the column can only ever hold a list of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct DataClasses(pub Vec<String>);

impl DataClasses {
    /// Borrows the labels
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Unwraps the labels
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for DataClasses {
    fn from(classes: Vec<String>) -> Self {
        Self(classes)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "breach_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub title: String,
    pub domain: String,
    pub breach_date: Option<Date>,
    pub added_at: DateTime,
    pub modified_at: Option<DateTime>,
    pub pwn_count: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub logo_path: Option<String>,
    pub data_classes: DataClasses,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::breach_user::Entity",
        from = "Column::UserId",
        to = "super::breach_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BreachUser,
}

impl Related<super::breach_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BreachUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
