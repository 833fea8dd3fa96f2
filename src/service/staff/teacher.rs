use entity::enums::{Shift, UserRole};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::data::staff::TeacherRepository;
use crate::data::user_account::UserAccountRepository;
use crate::error::Error;
use crate::model::db::TeacherModel;
use crate::model::dto::NewStaffMember;
use crate::service::code::CodeService;
use crate::service::retry::RetryContext;

/// Onboards teachers.
pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    /// Creates a new instance of [`TeacherService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Onboards a teacher: account, teacher row and employee code in one
    /// transaction, retried on transient database errors.
    pub async fn create_teacher(&self, new_teacher: NewStaffMember) -> Result<TeacherModel, Error> {
        let shift = Shift::from_input(&new_teacher.shift)
            .ok_or_else(|| Error::ParseError(format!("Unknown shift: {}", new_teacher.shift)))?;

        RetryContext::new()
            .execute_with_retry("create teacher", || {
                self.try_create_teacher(&new_teacher, shift)
            })
            .await
    }

    async fn try_create_teacher(
        &self,
        new_teacher: &NewStaffMember,
        shift: Shift,
    ) -> Result<TeacherModel, Error> {
        let txn = self.db.begin().await?;

        let account = UserAccountRepository::new(&txn)
            .get_or_create(&new_teacher.email, &new_teacher.name, UserRole::Teacher)
            .await?;

        let teachers = TeacherRepository::new(&txn);
        let teacher = teachers
            .create(new_teacher.campus_id, account.id, &new_teacher.name, shift)
            .await?;

        CodeService::new(&txn).assign_teacher_code(teacher.id).await?;

        let teacher = teachers
            .get(teacher.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Teacher {} not found", teacher.id)))?;

        txn.commit().await?;

        Ok(teacher)
    }
}
