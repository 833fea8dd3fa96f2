use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260102_000009_student::Student;

static IDX_ATTENDANCE_SUMMARY_STUDENT_MONTH: &str = "idx-attendance_summary-student_id-year-month";
static FK_ATTENDANCE_SUMMARY_STUDENT_ID: &str = "fk-attendance_summary-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttendanceSummary::Table)
                    .if_not_exists()
                    .col(pk_auto(AttendanceSummary::Id))
                    .col(integer(AttendanceSummary::StudentId))
                    .col(integer(AttendanceSummary::Year))
                    .col(integer(AttendanceSummary::Month))
                    .col(integer(AttendanceSummary::PresentCount))
                    .col(integer(AttendanceSummary::AbsentCount))
                    .col(integer(AttendanceSummary::LeaveCount))
                    .col(integer(AttendanceSummary::LateCount))
                    .col(timestamp(AttendanceSummary::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATTENDANCE_SUMMARY_STUDENT_MONTH)
                    .table(AttendanceSummary::Table)
                    .col(AttendanceSummary::StudentId)
                    .col(AttendanceSummary::Year)
                    .col(AttendanceSummary::Month)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ATTENDANCE_SUMMARY_STUDENT_ID)
                    .from_tbl(AttendanceSummary::Table)
                    .from_col(AttendanceSummary::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ATTENDANCE_SUMMARY_STUDENT_ID)
                    .table(AttendanceSummary::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATTENDANCE_SUMMARY_STUDENT_MONTH)
                    .table(AttendanceSummary::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AttendanceSummary::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AttendanceSummary {
    Table,
    Id,
    StudentId,
    Year,
    Month,
    PresentCount,
    AbsentCount,
    LeaveCount,
    LateCount,
    UpdatedAt,
}
