use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
};

/// Queries for the grade table.
pub struct GradeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GradeRepository<'a, C> {
    /// Creates a new instance of [`GradeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a grade without a code
    pub async fn create(&self, level_id: i32, name: &str) -> Result<entity::grade::Model, DbErr> {
        let grade = entity::grade::ActiveModel {
            level_id: ActiveValue::Set(level_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        grade.insert(self.db).await
    }

    /// Gets a grade by ID
    pub async fn get(&self, grade_id: i32) -> Result<Option<entity::grade::Model>, DbErr> {
        entity::prelude::Grade::find_by_id(grade_id)
            .one(self.db)
            .await
    }

    /// Stamps an assigned code onto a grade
    pub async fn set_code(
        &self,
        grade_id: i32,
        code: &str,
    ) -> Result<Option<entity::grade::Model>, DbErr> {
        let grade = match self.get(grade_id).await? {
            Some(grade) => grade,
            None => return Ok(None),
        };

        let mut grade_am = grade.into_active_model();
        grade_am.code = ActiveValue::Set(Some(code.to_string()));
        grade_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let grade = grade_am.update(self.db).await?;

        Ok(Some(grade))
    }
}
