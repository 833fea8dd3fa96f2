use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260102_000001_campus::Campus, m20260102_000004_coordinator::Coordinator};

static IDX_LEVEL_CAMPUS_STAGE_SHIFT: &str = "idx-level-campus_id-stage-shift";
static FK_LEVEL_CAMPUS_ID: &str = "fk-level-campus_id";
static FK_LEVEL_COORDINATOR_ID: &str = "fk-level-coordinator_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Level::Table)
                    .if_not_exists()
                    .col(pk_auto(Level::Id))
                    .col(integer(Level::CampusId))
                    .col(string(Level::Stage))
                    .col(string(Level::Shift))
                    .col(string_null(Level::Code).unique_key())
                    .col(integer_null(Level::CoordinatorId))
                    .col(timestamp(Level::CreatedAt))
                    .col(timestamp(Level::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEVEL_CAMPUS_STAGE_SHIFT)
                    .table(Level::Table)
                    .col(Level::CampusId)
                    .col(Level::Stage)
                    .col(Level::Shift)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEVEL_CAMPUS_ID)
                    .from_tbl(Level::Table)
                    .from_col(Level::CampusId)
                    .to_tbl(Campus::Table)
                    .to_col(Campus::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEVEL_COORDINATOR_ID)
                    .from_tbl(Level::Table)
                    .from_col(Level::CoordinatorId)
                    .to_tbl(Coordinator::Table)
                    .to_col(Coordinator::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LEVEL_COORDINATOR_ID)
                    .table(Level::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LEVEL_CAMPUS_ID)
                    .table(Level::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LEVEL_CAMPUS_STAGE_SHIFT)
                    .table(Level::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Level::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Level {
    Table,
    Id,
    CampusId,
    Stage,
    Shift,
    Code,
    CoordinatorId,
    CreatedAt,
    UpdatedAt,
}
