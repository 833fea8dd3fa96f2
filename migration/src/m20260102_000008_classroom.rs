use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260102_000003_teacher::Teacher, m20260102_000007_grade::Grade};

static IDX_CLASSROOM_GRADE_SECTION: &str = "idx-classroom-grade_id-section";
static FK_CLASSROOM_GRADE_ID: &str = "fk-classroom-grade_id";
static FK_CLASSROOM_CLASS_TEACHER_ID: &str = "fk-classroom-class_teacher_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Classroom::Table)
                    .if_not_exists()
                    .col(pk_auto(Classroom::Id))
                    .col(integer(Classroom::GradeId))
                    .col(string(Classroom::Section))
                    .col(string_null(Classroom::Code).unique_key())
                    .col(integer_null(Classroom::ClassTeacherId).unique_key())
                    .col(timestamp(Classroom::CreatedAt))
                    .col(timestamp(Classroom::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CLASSROOM_GRADE_SECTION)
                    .table(Classroom::Table)
                    .col(Classroom::GradeId)
                    .col(Classroom::Section)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CLASSROOM_GRADE_ID)
                    .from_tbl(Classroom::Table)
                    .from_col(Classroom::GradeId)
                    .to_tbl(Grade::Table)
                    .to_col(Grade::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CLASSROOM_CLASS_TEACHER_ID)
                    .from_tbl(Classroom::Table)
                    .from_col(Classroom::ClassTeacherId)
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
                    .name(FK_CLASSROOM_CLASS_TEACHER_ID)
                    .table(Classroom::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CLASSROOM_GRADE_ID)
                    .table(Classroom::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CLASSROOM_GRADE_SECTION)
                    .table(Classroom::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Classroom::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Classroom {
    Table,
    Id,
    GradeId,
    Section,
    Code,
    ClassTeacherId,
    CreatedAt,
    UpdatedAt,
}
