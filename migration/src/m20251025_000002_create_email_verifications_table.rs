use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{string, timestamp_with_time_zone, uuid},
};

const USER_ID_INDEX_NAME: &str = "email_verifications_user_id_index";
const EXPIRES_AT_INDEX_NAME: &str = "email_verifications_expires_at_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmailVerification::Table)
                    .if_not_exists()
                    .col(uuid(EmailVerification::Id).primary_key())
                    .col(uuid(EmailVerification::UserId))
                    .col(string(EmailVerification::NewEmail))
                    .col(string(EmailVerification::Token))
                    .col(timestamp_with_time_zone(EmailVerification::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(EmailVerification::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(EmailVerification::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-email_verifications-user_id")
                            .from(EmailVerification::Table, EmailVerification::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(USER_ID_INDEX_NAME)
                    .table(EmailVerification::Table)
                    .col(EmailVerification::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(EXPIRES_AT_INDEX_NAME)
                    .table(EmailVerification::Table)
                    .col(EmailVerification::ExpiresAt)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(EXPIRES_AT_INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name(USER_ID_INDEX_NAME).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmailVerification::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EmailVerification {
    #[sea_orm(iden = "email_verifications")]
    Table,
    Id,
    UserId,
    NewEmail,
    Token,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
}
