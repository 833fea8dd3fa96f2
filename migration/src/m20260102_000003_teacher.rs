use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260102_000001_campus::Campus, m20260102_000002_user_account::UserAccount};

static IDX_TEACHER_CAMPUS_ID: &str = "idx-teacher-campus_id";
static FK_TEACHER_CAMPUS_ID: &str = "fk-teacher-campus_id";
static FK_TEACHER_USER_ACCOUNT_ID: &str = "fk-teacher-user_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(pk_auto(Teacher::Id))
                    .col(integer(Teacher::CampusId))
                    .col(integer_uniq(Teacher::UserAccountId))
                    .col(string(Teacher::Name))
                    .col(string(Teacher::Shift))
                    .col(string_null(Teacher::EmployeeCode).unique_key())
                    .col(timestamp(Teacher::CreatedAt))
                    .col(timestamp(Teacher::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEACHER_CAMPUS_ID)
                    .table(Teacher::Table)
                    .col(Teacher::CampusId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEACHER_CAMPUS_ID)
                    .from_tbl(Teacher::Table)
                    .from_col(Teacher::CampusId)
                    .to_tbl(Campus::Table)
                    .to_col(Campus::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEACHER_USER_ACCOUNT_ID)
                    .from_tbl(Teacher::Table)
                    .from_col(Teacher::UserAccountId)
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
                    .name(FK_TEACHER_USER_ACCOUNT_ID)
                    .table(Teacher::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEACHER_CAMPUS_ID)
                    .table(Teacher::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEACHER_CAMPUS_ID)
                    .table(Teacher::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Teacher::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Teacher {
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
