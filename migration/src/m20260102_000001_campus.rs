use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campus::Table)
                    .if_not_exists()
                    .col(pk_auto(Campus::Id))
                    .col(string_uniq(Campus::Name))
                    .col(string(Campus::City))
                    .col(string_null(Campus::Code).unique_key())
                    .col(timestamp(Campus::CreatedAt))
                    .col(timestamp(Campus::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Campus::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Campus {
    Table,
    Id,
    Name,
    City,
    Code,
    CreatedAt,
    UpdatedAt,
}
