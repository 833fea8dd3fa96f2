use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(UserAccount::Id))
                    .col(string_uniq(UserAccount::Email))
                    .col(string(UserAccount::Name))
                    .col(string(UserAccount::Role))
                    .col(boolean(UserAccount::IsActive))
                    .col(timestamp(UserAccount::CreatedAt))
                    .col(timestamp(UserAccount::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAccount::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserAccount {
    Table,
    Id,
    Email,
    Name,
    Role,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
