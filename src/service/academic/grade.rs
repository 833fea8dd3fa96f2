use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::data::school::GradeRepository;
use crate::error::Error;
use crate::model::db::GradeModel;
use crate::model::dto::NewGrade;
use crate::service::code::CodeService;

/// Creates grades under a level.
pub struct GradeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GradeService<'a> {
    /// Creates a new instance of [`GradeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a grade and assigns its code in one transaction.
    pub async fn create_grade(&self, new_grade: NewGrade) -> Result<GradeModel, Error> {
        let txn = self.db.begin().await?;

        let grades = GradeRepository::new(&txn);
        let grade = grades.create(new_grade.level_id, &new_grade.name).await?;

        CodeService::new(&txn).assign_grade_code(grade.id).await?;

        let grade = grades
            .get(grade.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Grade {} not found", grade.id)))?;

        txn.commit().await?;

        Ok(grade)
    }
}
