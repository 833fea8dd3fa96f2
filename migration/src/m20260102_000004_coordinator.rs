use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260102_000001_campus::Campus, m20260102_000002_user_account::UserAccount};

static IDX_COORDINATOR_CAMPUS_ID: &str = "idx-coordinator-campus_id";
static FK_COORDINATOR_CAMPUS_ID: &str = "fk-coordinator-campus_id";
static FK_COORDINATOR_USER_ACCOUNT_ID: &str = "fk-coordinator-user_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coordinator::Table)
                    .if_not_exists()
                    .col(pk_auto(Coordinator::Id))
                    .col(integer(Coordinator::CampusId))
                    .col(integer_uniq(Coordinator::UserAccountId))
                    .col(string(Coordinator::Name))
                    .col(string(Coordinator::Shift))
                    .col(string_null(Coordinator::EmployeeCode).unique_key())
                    .col(timestamp(Coordinator::CreatedAt))
                    .col(timestamp(Coordinator::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COORDINATOR_CAMPUS_ID)
                    .table(Coordinator::Table)
                    .col(Coordinator::CampusId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COORDINATOR_CAMPUS_ID)
                    .from_tbl(Coordinator::Table)
                    .from_col(Coordinator::CampusId)
                    .to_tbl(Campus::Table)
                    .to_col(Campus::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COORDINATOR_USER_ACCOUNT_ID)
                    .from_tbl(Coordinator::Table)
                    .from_col(Coordinator::UserAccountId)
                    .to_tbl(UserAccount::Table)
                    .to_col(UserAccount::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COORDINATOR_USER_ACCOUNT_ID)
                    .table(Coordinator::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COORDINATOR_CAMPUS_ID)
                    .table(Coordinator::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COORDINATOR_CAMPUS_ID)
                    .table(Coordinator::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Coordinator::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Coordinator {
    Table,
    Id,
    CampusId,
    UserAccountId,
    Name,
    Shift,
    EmployeeCode,
    CreatedAt,
    UpdatedAt,
}
