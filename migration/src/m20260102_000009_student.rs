use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260102_000001_campus::Campus, m20260102_000002_user_account::UserAccount,
    m20260102_000008_classroom::Classroom,
};

static IDX_STUDENT_CAMPUS_ID: &str = "idx-student-campus_id";
static FK_STUDENT_CAMPUS_ID: &str = "fk-student-campus_id";
static FK_STUDENT_CLASSROOM_ID: &str = "fk-student-classroom_id";
static FK_STUDENT_USER_ACCOUNT_ID: &str = "fk-student-user_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(integer(Student::CampusId))
                    .col(integer_null(Student::ClassroomId))
                    .col(integer_null(Student::UserAccountId))
                    .col(string(Student::Name))
                    .col(string(Student::GuardianName))
                    .col(string(Student::Shift))
                    .col(string_null(Student::StudentCode).unique_key())
                    .col(timestamp(Student::CreatedAt))
                    .col(timestamp(Student::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STUDENT_CAMPUS_ID)
                    .table(Student::Table)
                    .col(Student::CampusId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_CAMPUS_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::CampusId)
                    .to_tbl(Campus::Table)
                    .to_col(Campus::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_CLASSROOM_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::ClassroomId)
                    .to_tbl(Classroom::Table)
                    .to_col(Classroom::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_USER_ACCOUNT_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::UserAccountId)
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
                    .name(FK_STUDENT_USER_ACCOUNT_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STUDENT_CLASSROOM_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STUDENT_CAMPUS_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STUDENT_CAMPUS_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    CampusId,
    ClassroomId,
    UserAccountId,
    Name,
    GuardianName,
    Shift,
    StudentCode,
    CreatedAt,
    UpdatedAt,
}
