use sea_orm_migration::{prelude::*, schema::*};

static IDX_BREACH_USER_NOTIFICATIONS_ENABLED: &str = "idx_breach_user_notifications_enabled";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BreachUser::Table)
                    .if_not_exists()
                    .col(pk_auto(BreachUser::Id))
                    .col(string(BreachUser::Name))
                    .col(string_uniq(BreachUser::Email))
                    .col(boolean(BreachUser::NotificationsEnabled).default(false))
                    .col(timestamp(BreachUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BREACH_USER_NOTIFICATIONS_ENABLED)
                    .table(BreachUser::Table)
                    .col(BreachUser::NotificationsEnabled)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BREACH_USER_NOTIFICATIONS_ENABLED)
                    .table(BreachUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BreachUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BreachUser {
    Table,
    Id,
    Name,
    Email,
    NotificationsEnabled,
    CreatedAt,
}
