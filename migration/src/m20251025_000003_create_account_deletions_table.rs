use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{string_len, timestamp_with_time_zone, uuid, uuid_null},
};

const USER_ID_STATUS_INDEX_NAME: &str = "account_deletions_user_id_status_index";
const STATUS_SCHEDULED_INDEX_NAME: &str = "account_deletions_status_scheduled_deletion_at_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountDeletion::Table)
                    .if_not_exists()
                    .col(uuid(AccountDeletion::Id).primary_key())
                    .col(uuid_null(AccountDeletion::UserId))
                    .col(timestamp_with_time_zone(AccountDeletion::RequestedAt))
                    .col(timestamp_with_time_zone(AccountDeletion::ScheduledDeletionAt))
                    .col(string_len(AccountDeletion::Status, 16).default("pending"))
                    .col(
                        timestamp_with_time_zone(AccountDeletion::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(AccountDeletion::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-account_deletions-user_id")
                            .from(AccountDeletion::Table, AccountDeletion::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(USER_ID_STATUS_INDEX_NAME)
                    .table(AccountDeletion::Table)
                    .col(AccountDeletion::UserId)
                    .col(AccountDeletion::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(STATUS_SCHEDULED_INDEX_NAME)
                    .table(AccountDeletion::Table)
                    .col(AccountDeletion::Status)
                    .col(AccountDeletion::ScheduledDeletionAt)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(STATUS_SCHEDULED_INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name(USER_ID_STATUS_INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AccountDeletion::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AccountDeletion {
    #[sea_orm(iden = "account_deletions")]
    Table,
    Id,
    UserId,
    RequestedAt,
    ScheduledDeletionAt,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
}
