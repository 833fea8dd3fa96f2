use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::data::school::ClassroomRepository;
use crate::data::staff::TeacherRepository;
use crate::error::Error;
use crate::model::db::ClassroomModel;
use crate::model::dto::NewClassroom;
use crate::service::code::CodeService;

/// Creates classrooms and manages their class teacher link.
pub struct ClassroomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassroomService<'a> {
    /// Creates a new instance of [`ClassroomService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a classroom and assigns its code in one transaction.
    pub async fn create_classroom(
        &self,
        new_classroom: NewClassroom,
    ) -> Result<ClassroomModel, Error> {
        let txn = self.db.begin().await?;

        let classrooms = ClassroomRepository::new(&txn);
        let classroom = classrooms
            .create(new_classroom.grade_id, &new_classroom.section)
            .await?;

        CodeService::new(&txn)
            .assign_classroom_code(classroom.id)
            .await?;

        let classroom = classrooms.get(classroom.id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Classroom {} not found", classroom.id))
        })?;

        txn.commit().await?;

        Ok(classroom)
    }

    /// Makes a teacher the class teacher of a classroom.
    ///
    /// A teacher holds at most one classroom, so any previous link is released
    /// in the same transaction before the new one is written.
    pub async fn assign_class_teacher(
        &self,
        classroom_id: i32,
        teacher_id: i32,
    ) -> Result<ClassroomModel, Error> {
        let txn = self.db.begin().await?;

        TeacherRepository::new(&txn)
            .get(teacher_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Teacher {teacher_id} not found")))?;

        let classrooms = ClassroomRepository::new(&txn);
        classrooms.release_class_teacher(teacher_id).await?;

        let classroom = classrooms
            .set_class_teacher(classroom_id, Some(teacher_id))
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Classroom {classroom_id} not found"))
            })?;

        txn.commit().await?;

        Ok(classroom)
    }
}
