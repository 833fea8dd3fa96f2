use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260102_000006_level::Level;

static IDX_GRADE_LEVEL_NAME: &str = "idx-grade-level_id-name";
static FK_GRADE_LEVEL_ID: &str = "fk-grade-level_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Grade::Table)
                    .if_not_exists()
                    .col(pk_auto(Grade::Id))
                    .col(integer(Grade::LevelId))
                    .col(string(Grade::Name))
                    .col(string_null(Grade::Code).unique_key())
                    .col(timestamp(Grade::CreatedAt))
                    .col(timestamp(Grade::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GRADE_LEVEL_NAME)
                    .table(Grade::Table)
                    .col(Grade::LevelId)
                    .col(Grade::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GRADE_LEVEL_ID)
                    .from_tbl(Grade::Table)
                    .from_col(Grade::LevelId)
                    .to_tbl(Level::Table)
                    .to_col(Level::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GRADE_LEVEL_ID)
                    .table(Grade::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GRADE_LEVEL_NAME)
                    .table(Grade::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Grade::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Grade {
    Table,
    Id,
    LevelId,
    Name,
    Code,
    CreatedAt,
    UpdatedAt,
}
