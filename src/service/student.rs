//! Student enrollment.

use entity::enums::{Shift, UserRole};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::data::student::StudentRepository;
use crate::data::user_account::UserAccountRepository;
use crate::error::Error;
use crate::model::db::StudentModel;
use crate::model::dto::NewStudent;
use crate::service::code::CodeService;
use crate::service::retry::RetryContext;

/// Enrolls students.
pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    /// Creates a new instance of [`StudentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a student: student row and student code in one transaction,
    /// retried on transient database errors.
    ///
    /// A login account is created only when an email is supplied; young
    /// students are commonly enrolled without one.
    pub async fn create_student(&self, new_student: NewStudent) -> Result<StudentModel, Error> {
        let shift = Shift::from_input(&new_student.shift)
            .ok_or_else(|| Error::ParseError(format!("Unknown shift: {}", new_student.shift)))?;

        RetryContext::new()
            .execute_with_retry("create student", || {
                self.try_create_student(&new_student, shift)
            })
            .await
    }

    async fn try_create_student(
        &self,
        new_student: &NewStudent,
        shift: Shift,
    ) -> Result<StudentModel, Error> {
        let txn = self.db.begin().await?;

        let account_id = match &new_student.email {
            Some(email) => Some(
                UserAccountRepository::new(&txn)
                    .get_or_create(email, &new_student.name, UserRole::Student)
                    .await?
                    .id,
            ),
            None => None,
        };

        let students = StudentRepository::new(&txn);
        let student = students
            .create(
                new_student.campus_id,
                new_student.classroom_id,
                account_id,
                &new_student.name,
                &new_student.guardian_name,
                shift,
            )
            .await?;

        CodeService::new(&txn).assign_student_code(student.id).await?;

        let student = students
            .get(student.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Student {} not found", student.id)))?;

        txn.commit().await?;

        Ok(student)
    }
}
