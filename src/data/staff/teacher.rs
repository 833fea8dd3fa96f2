use chrono::Utc;
use entity::enums::Shift;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Queries for the teacher table.
pub struct TeacherRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeacherRepository<'a, C> {
    /// Creates a new instance of [`TeacherRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a teacher without an employee code
    pub async fn create(
        &self,
        campus_id: i32,
        user_account_id: i32,
        name: &str,
        shift: Shift,
    ) -> Result<entity::teacher::Model, DbErr> {
        let teacher = entity::teacher::ActiveModel {
            campus_id: ActiveValue::Set(campus_id),
            user_account_id: ActiveValue::Set(user_account_id),
            name: ActiveValue::Set(name.to_string()),
            shift: ActiveValue::Set(shift),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        teacher.insert(self.db).await
    }

    /// Gets a teacher by ID
    pub async fn get(&self, teacher_id: i32) -> Result<Option<entity::teacher::Model>, DbErr> {
        entity::prelude::Teacher::find_by_id(teacher_id)
            .one(self.db)
            .await
    }

    /// Returns true when any teacher already holds the given employee code
    pub async fn employee_code_exists(&self, code: &str) -> Result<bool, DbErr> {
        Ok(entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::EmployeeCode.eq(code))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Gets all teachers that never received an employee code
    pub async fn get_many_missing_code(&self) -> Result<Vec<entity::teacher::Model>, DbErr> {
        entity::prelude::Teacher::find()
            .filter(entity::teacher::Column::EmployeeCode.is_null())
            .all(self.db)
            .await
    }

    /// Stamps an assigned employee code onto a teacher
    pub async fn set_employee_code(
        &self,
        teacher_id: i32,
        code: &str,
    ) -> Result<Option<entity::teacher::Model>, DbErr> {
        let teacher = match self.get(teacher_id).await? {
            Some(teacher) => teacher,
            None => return Ok(None),
        };

        let mut teacher_am = teacher.into_active_model();
        teacher_am.employee_code = ActiveValue::Set(Some(code.to_string()));
        teacher_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let teacher = teacher_am.update(self.db).await?;

        Ok(Some(teacher))
    }

    /// Moves a teacher to a new campus and shift and replaces their employee code
    ///
    /// Only the transfer approval path may call this; codes are otherwise write-once.
    pub async fn update_assignment(
        &self,
        teacher_id: i32,
        campus_id: i32,
        shift: Shift,
        employee_code: &str,
    ) -> Result<Option<entity::teacher::Model>, DbErr> {
        let teacher = match self.get(teacher_id).await? {
            Some(teacher) => teacher,
            None => return Ok(None),
        };

        let mut teacher_am = teacher.into_active_model();
        teacher_am.campus_id = ActiveValue::Set(campus_id);
        teacher_am.shift = ActiveValue::Set(shift);
        teacher_am.employee_code = ActiveValue::Set(Some(employee_code.to_string()));
        teacher_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let teacher = teacher_am.update(self.db).await?;

        Ok(Some(teacher))
    }
}
