use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_create_breach_user_table::BreachUser;

static IDX_BREACH_RECORD_USER_NAME_DATE: &str = "idx_breach_record_user_name_date";
static FK_BREACH_RECORD_USER_ID: &str = "fk_breach_record_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BreachRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(BreachRecord::Id))
                    .col(integer(BreachRecord::UserId))
                    .col(string(BreachRecord::Name))
                    .col(string(BreachRecord::Title))
                    .col(string(BreachRecord::Domain))
                    .col(date_null(BreachRecord::BreachDate))
                    .col(timestamp(BreachRecord::AddedAt))
                    .col(timestamp_null(BreachRecord::ModifiedAt))
                    .col(big_integer(BreachRecord::PwnCount))
                    .col(text_null(BreachRecord::Description))
                    .col(string_null(BreachRecord::LogoPath))
                    .col(json(BreachRecord::DataClasses))
                    .to_owned(),
            )
            .await?;

        // Backs the (user, name, breach date) dedup lookup; uniqueness is
        // enforced by the sync service, not the store.
        manager
            .create_index(
                Index::create()
                    .name(IDX_BREACH_RECORD_USER_NAME_DATE)
                    .table(BreachRecord::Table)
                    .col(BreachRecord::UserId)
                    .col(BreachRecord::Name)
                    .col(BreachRecord::BreachDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BREACH_RECORD_USER_ID)
                    .from_tbl(BreachRecord::Table)
                    .from_col(BreachRecord::UserId)
                    .to_tbl(BreachUser::Table)
                    .to_col(BreachUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BREACH_RECORD_USER_ID)
                    .table(BreachRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BREACH_RECORD_USER_NAME_DATE)
                    .table(BreachRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BreachRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BreachRecord {
    Table,
    Id,
    UserId,
    Name,
    Title,
    Domain,
    BreachDate,
    AddedAt,
    ModifiedAt,
    PwnCount,
    Description,
    LogoPath,
    DataClasses,
}
