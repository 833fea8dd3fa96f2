use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260102_000001_campus::Campus, m20260102_000002_user_account::UserAccount,
    m20260102_000003_teacher::Teacher, m20260102_000009_student::Student,
};

static IDX_TRANSFER_REQUEST_STATUS: &str = "idx-transfer_request-status";
static FK_TRANSFER_REQUEST_STUDENT_ID: &str = "fk-transfer_request-student_id";
static FK_TRANSFER_REQUEST_TEACHER_ID: &str = "fk-transfer_request-teacher_id";
static FK_TRANSFER_REQUEST_FROM_CAMPUS_ID: &str = "fk-transfer_request-from_campus_id";
static FK_TRANSFER_REQUEST_TO_CAMPUS_ID: &str = "fk-transfer_request-to_campus_id";
static FK_TRANSFER_REQUEST_REQUESTED_BY: &str = "fk-transfer_request-requested_by";
static FK_TRANSFER_REQUEST_DECIDED_BY: &str = "fk-transfer_request-decided_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransferRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(TransferRequest::Id))
                    .col(string(TransferRequest::SubjectType))
                    .col(integer_null(TransferRequest::StudentId))
                    .col(integer_null(TransferRequest::TeacherId))
                    .col(integer(TransferRequest::FromCampusId))
                    .col(integer(TransferRequest::ToCampusId))
                    .col(string(TransferRequest::FromShift))
                    .col(string(TransferRequest::ToShift))
                    .col(string(TransferRequest::Reason))
                    .col(string(TransferRequest::Status))
                    .col(integer(TransferRequest::RequestedBy))
                    .col(integer_null(TransferRequest::DecidedBy))
                    .col(timestamp_null(TransferRequest::DecidedAt))
                    .col(string_null(TransferRequest::DecisionNote))
                    .col(timestamp(TransferRequest::CreatedAt))
                    .col(timestamp(TransferRequest::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRANSFER_REQUEST_STATUS)
                    .table(TransferRequest::Table)
                    .col(TransferRequest::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRANSFER_REQUEST_STUDENT_ID)
                    .from_tbl(TransferRequest::Table)
                    .from_col(TransferRequest::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRANSFER_REQUEST_TEACHER_ID)
                    .from_tbl(TransferRequest::Table)
                    .from_col(TransferRequest::TeacherId)
                    .to_tbl(Teacher::Table)
                    .to_col(Teacher::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRANSFER_REQUEST_FROM_CAMPUS_ID)
                    .from_tbl(TransferRequest::Table)
                    .from_col(TransferRequest::FromCampusId)
                    .to_tbl(Campus::Table)
                    .to_col(Campus::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRANSFER_REQUEST_TO_CAMPUS_ID)
                    .from_tbl(TransferRequest::Table)
                    .from_col(TransferRequest::ToCampusId)
                    .to_tbl(Campus::Table)
                    .to_col(Campus::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRANSFER_REQUEST_REQUESTED_BY)
                    .from_tbl(TransferRequest::Table)
                    .from_col(TransferRequest::RequestedBy)
                    .to_tbl(UserAccount::Table)
                    .to_col(UserAccount::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TRANSFER_REQUEST_DECIDED_BY)
                    .from_tbl(TransferRequest::Table)
                    .from_col(TransferRequest::DecidedBy)
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
                    .name(FK_TRANSFER_REQUEST_DECIDED_BY)
                    .table(TransferRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TRANSFER_REQUEST_REQUESTED_BY)
                    .table(TransferRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TRANSFER_REQUEST_TO_CAMPUS_ID)
                    .table(TransferRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TRANSFER_REQUEST_FROM_CAMPUS_ID)
                    .table(TransferRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TRANSFER_REQUEST_TEACHER_ID)
                    .table(TransferRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TRANSFER_REQUEST_STUDENT_ID)
                    .table(TransferRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRANSFER_REQUEST_STATUS)
                    .table(TransferRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TransferRequest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TransferRequest {
    Table,
    Id,
    SubjectType,
    StudentId,
    TeacherId,
    FromCampusId,
    ToCampusId,
    FromShift,
    ToShift,
    Reason,
    Status,
    RequestedBy,
    DecidedBy,
    DecidedAt,
    DecisionNote,
    CreatedAt,
    UpdatedAt,
}
