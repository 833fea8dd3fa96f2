use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Queries for the classroom table.
pub struct ClassroomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassroomRepository<'a, C> {
    /// Creates a new instance of [`ClassroomRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a classroom without a code or class teacher
    pub async fn create(
        &self,
        grade_id: i32,
        section: &str,
    ) -> Result<entity::classroom::Model, DbErr> {
        let classroom = entity::classroom::ActiveModel {
            grade_id: ActiveValue::Set(grade_id),
            section: ActiveValue::Set(section.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        classroom.insert(self.db).await
    }

    /// Gets a classroom by ID
    pub async fn get(&self, classroom_id: i32) -> Result<Option<entity::classroom::Model>, DbErr> {
        entity::prelude::Classroom::find_by_id(classroom_id)
            .one(self.db)
            .await
    }

    /// Stamps an assigned code onto a classroom
    pub async fn set_code(
        &self,
        classroom_id: i32,
        code: &str,
    ) -> Result<Option<entity::classroom::Model>, DbErr> {
        let classroom = match self.get(classroom_id).await? {
            Some(classroom) => classroom,
            None => return Ok(None),
        };

        let mut classroom_am = classroom.into_active_model();
        classroom_am.code = ActiveValue::Set(Some(code.to_string()));
        classroom_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let classroom = classroom_am.update(self.db).await?;

        Ok(Some(classroom))
    }

    /// Sets or clears the class teacher of a classroom
    pub async fn set_class_teacher(
        &self,
        classroom_id: i32,
        teacher_id: Option<i32>,
    ) -> Result<Option<entity::classroom::Model>, DbErr> {
        let classroom = match self.get(classroom_id).await? {
            Some(classroom) => classroom,
            None => return Ok(None),
        };

        let mut classroom_am = classroom.into_active_model();
        classroom_am.class_teacher_id = ActiveValue::Set(teacher_id);
        classroom_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let classroom = classroom_am.update(self.db).await?;

        Ok(Some(classroom))
    }

    /// Releases a teacher from whichever classroom they currently lead
    ///
    /// A teacher leads at most one classroom; returns the number of rows touched.
    pub async fn release_class_teacher(&self, teacher_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Classroom::update_many()
            .col_expr(
                entity::classroom::Column::ClassTeacherId,
                Expr::value(None::<i32>),
            )
            .col_expr(
                entity::classroom::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::classroom::Column::ClassTeacherId.eq(teacher_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
