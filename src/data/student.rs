use chrono::Utc;
use entity::enums::Shift;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Queries for the student table.
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a student without a student code
    pub async fn create(
        &self,
        campus_id: i32,
        classroom_id: Option<i32>,
        user_account_id: Option<i32>,
        name: &str,
        guardian_name: &str,
        shift: Shift,
    ) -> Result<entity::student::Model, DbErr> {
        let student = entity::student::ActiveModel {
            campus_id: ActiveValue::Set(campus_id),
            classroom_id: ActiveValue::Set(classroom_id),
            user_account_id: ActiveValue::Set(user_account_id),
            name: ActiveValue::Set(name.to_string()),
            guardian_name: ActiveValue::Set(guardian_name.to_string()),
            shift: ActiveValue::Set(shift),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        student.insert(self.db).await
    }

    /// Gets a student by ID
    pub async fn get(&self, student_id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(student_id)
            .one(self.db)
            .await
    }

    /// Returns true when any student already holds the given student code
    pub async fn student_code_exists(&self, code: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::Student::find()
            .filter(entity::student::Column::StudentCode.eq(code))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Gets all students that never received a student code
    pub async fn get_many_missing_code(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::StudentCode.is_null())
            .all(self.db)
            .await
    }

    /// Stamps an assigned student code onto a student
    pub async fn set_student_code(
        &self,
        student_id: i32,
        code: &str,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        let student = match self.get(student_id).await? {
            Some(student) => student,
            None => return Ok(None),
        };

        let mut student_am = student.into_active_model();
        student_am.student_code = ActiveValue::Set(Some(code.to_string()));
        student_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let student = student_am.update(self.db).await?;

        Ok(Some(student))
    }

    /// Moves a student to a new campus and shift and replaces their student code
    ///
    /// The classroom link is cleared; placement at the destination campus happens
    /// separately. Only the transfer approval path may call this.
    pub async fn update_assignment(
        &self,
        student_id: i32,
        campus_id: i32,
        shift: Shift,
        student_code: &str,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        let student = match self.get(student_id).await? {
            Some(student) => student,
            None => return Ok(None),
        };

        let mut student_am = student.into_active_model();
        student_am.campus_id = ActiveValue::Set(campus_id);
        student_am.classroom_id = ActiveValue::Set(None);
        student_am.shift = ActiveValue::Set(shift);
        student_am.student_code = ActiveValue::Set(Some(student_code.to_string()));
        student_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let student = student_am.update(self.db).await?;

        Ok(Some(student))
    }
}
