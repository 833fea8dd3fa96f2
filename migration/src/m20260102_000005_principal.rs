use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260102_000001_campus::Campus, m20260102_000002_user_account::UserAccount};

static FK_PRINCIPAL_CAMPUS_ID: &str = "fk-principal-campus_id";
static FK_PRINCIPAL_USER_ACCOUNT_ID: &str = "fk-principal-user_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Principal::Table)
                    .if_not_exists()
                    .col(pk_auto(Principal::Id))
                    .col(integer_uniq(Principal::CampusId))
                    .col(integer_uniq(Principal::UserAccountId))
                    .col(string(Principal::Name))
                    .col(string(Principal::Shift))
                    .col(string_null(Principal::EmployeeCode).unique_key())
                    .col(timestamp(Principal::CreatedAt))
                    .col(timestamp(Principal::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRINCIPAL_CAMPUS_ID)
                    .from_tbl(Principal::Table)
                    .from_col(Principal::CampusId)
                    .to_tbl(Campus::Table)
                    .to_col(Campus::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRINCIPAL_USER_ACCOUNT_ID)
                    .from_tbl(Principal::Table)
                    .from_col(Principal::UserAccountId)
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
                    .name(FK_PRINCIPAL_USER_ACCOUNT_ID)
                    .table(Principal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRINCIPAL_CAMPUS_ID)
                    .table(Principal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Principal::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Principal {
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
