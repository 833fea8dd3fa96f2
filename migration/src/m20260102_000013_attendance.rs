use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260102_000008_classroom::Classroom, m20260102_000009_student::Student};

static IDX_ATTENDANCE_STUDENT_DATE: &str = "idx-attendance-student_id-date";
static FK_ATTENDANCE_STUDENT_ID: &str = "fk-attendance-student_id";
static FK_ATTENDANCE_CLASSROOM_ID: &str = "fk-attendance-classroom_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(integer(Attendance::StudentId))
                    .col(integer(Attendance::ClassroomId))
                    .col(date(Attendance::Date))
                    .col(string(Attendance::Status))
                    .col(timestamp(Attendance::CreatedAt))
                    .col(timestamp(Attendance::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATTENDANCE_STUDENT_DATE)
                    .table(Attendance::Table)
                    .col(Attendance::StudentId)
                    .col(Attendance::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ATTENDANCE_STUDENT_ID)
                    .from_tbl(Attendance::Table)
                    .from_col(Attendance::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ATTENDANCE_CLASSROOM_ID)
                    .from_tbl(Attendance::Table)
                    .from_col(Attendance::ClassroomId)
                    .to_tbl(Classroom::Table)
                    .to_col(Classroom::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ATTENDANCE_CLASSROOM_ID)
                    .table(Attendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ATTENDANCE_STUDENT_ID)
                    .table(Attendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATTENDANCE_STUDENT_DATE)
                    .table(Attendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Attendance {
    Table,
    Id,
    StudentId,
    ClassroomId,
    Date,
    Status,
    CreatedAt,
    UpdatedAt,
}
