//! A registered user whose email is monitored.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "breach_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub notifications_enabled: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::breach_record::Entity")]
    BreachRecord,
}

impl Related<super::breach_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BreachRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
