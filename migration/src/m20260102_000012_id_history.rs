use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260102_000003_teacher::Teacher, m20260102_000009_student::Student,
    m20260102_000011_transfer_request::TransferRequest,
};

static FK_ID_HISTORY_TRANSFER_REQUEST_ID: &str = "fk-id_history-transfer_request_id";
static FK_ID_HISTORY_STUDENT_ID: &str = "fk-id_history-student_id";
static FK_ID_HISTORY_TEACHER_ID: &str = "fk-id_history-teacher_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IdHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(IdHistory::Id))
                    .col(integer_uniq(IdHistory::TransferRequestId))
                    .col(integer_null(IdHistory::StudentId))
                    .col(integer_null(IdHistory::TeacherId))
                    .col(string(IdHistory::OldCode))
                    .col(string(IdHistory::NewCode))
                    .col(string(IdHistory::OldCampusCode))
                    .col(string(IdHistory::NewCampusCode))
                    .col(string(IdHistory::OldShiftCode))
                    .col(string(IdHistory::NewShiftCode))
                    .col(string(IdHistory::OldYearCode))
                    .col(string(IdHistory::NewYearCode))
                    .col(string_null(IdHistory::OldRoleCode))
                    .col(string_null(IdHistory::NewRoleCode))
                    .col(string(IdHistory::Suffix))
                    .col(timestamp(IdHistory::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ID_HISTORY_TRANSFER_REQUEST_ID)
                    .from_tbl(IdHistory::Table)
                    .from_col(IdHistory::TransferRequestId)
                    .to_tbl(TransferRequest::Table)
                    .to_col(TransferRequest::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ID_HISTORY_STUDENT_ID)
                    .from_tbl(IdHistory::Table)
                    .from_col(IdHistory::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ID_HISTORY_TEACHER_ID)
                    .from_tbl(IdHistory::Table)
                    .from_col(IdHistory::TeacherId)
                    .to_tbl(Teacher::Table)
                    .to_col(Teacher::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ID_HISTORY_TEACHER_ID)
                    .table(IdHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ID_HISTORY_STUDENT_ID)
                    .table(IdHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ID_HISTORY_TRANSFER_REQUEST_ID)
                    .table(IdHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(IdHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum IdHistory {
    Table,
    Id,
    TransferRequestId,
    StudentId,
    TeacherId,
    OldCode,
    NewCode,
    OldCampusCode,
    NewCampusCode,
    OldShiftCode,
    NewShiftCode,
    OldYearCode,
    NewYearCode,
    OldRoleCode,
    NewRoleCode,
    Suffix,
    CreatedAt,
}
