use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Field set recorded when an approved transfer rewrites a registration code.
///
/// The old and new codes are stored both whole and segment by segment so audits can
/// filter on any part of the change without re-parsing.
pub struct NewIdHistory {
    /// Approved transfer request that caused the rewrite.
    pub transfer_request_id: i32,
    /// Rewritten student, for student transfers.
    pub student_id: Option<i32>,
    /// Rewritten teacher, for teacher transfers.
    pub teacher_id: Option<i32>,
    /// Full code before the rewrite.
    pub old_code: String,
    /// Full code after the rewrite.
    pub new_code: String,
    /// Campus segment before, e.g. "C06".
    pub old_campus_code: String,
    /// Campus segment after, e.g. "C03".
    pub new_campus_code: String,
    /// Shift letter before.
    pub old_shift_code: String,
    /// Shift letter after.
    pub new_shift_code: String,
    /// Two-digit year segment before.
    pub old_year_code: String,
    /// Two-digit year segment after.
    pub new_year_code: String,
    /// Role letter before; absent on student codes.
    pub old_role_code: Option<String>,
    /// Role letter after; absent on student codes.
    pub new_role_code: Option<String>,
    /// Sequence digits, identical on both sides of the rewrite.
    pub suffix: String,
}

/// Queries for the identifier history table.
pub struct IdHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IdHistoryRepository<'a, C> {
    /// Creates a new instance of [`IdHistoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records the rewrite performed by an approved transfer
    ///
    /// The transfer request foreign key is unique, so a second record for the same
    /// request is rejected by the database.
    pub async fn create(&self, entry: NewIdHistory) -> Result<entity::id_history::Model, DbErr> {
        let history = entity::id_history::ActiveModel {
            transfer_request_id: ActiveValue::Set(entry.transfer_request_id),
            student_id: ActiveValue::Set(entry.student_id),
            teacher_id: ActiveValue::Set(entry.teacher_id),
            old_code: ActiveValue::Set(entry.old_code),
            new_code: ActiveValue::Set(entry.new_code),
            old_campus_code: ActiveValue::Set(entry.old_campus_code),
            new_campus_code: ActiveValue::Set(entry.new_campus_code),
            old_shift_code: ActiveValue::Set(entry.old_shift_code),
            new_shift_code: ActiveValue::Set(entry.new_shift_code),
            old_year_code: ActiveValue::Set(entry.old_year_code),
            new_year_code: ActiveValue::Set(entry.new_year_code),
            old_role_code: ActiveValue::Set(entry.old_role_code),
            new_role_code: ActiveValue::Set(entry.new_role_code),
            suffix: ActiveValue::Set(entry.suffix),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        history.insert(self.db).await
    }

    /// Gets the history record written for a transfer request, if any
    pub async fn get_by_transfer_request_id(
        &self,
        transfer_request_id: i32,
    ) -> Result<Option<entity::id_history::Model>, DbErr> {
        entity::prelude::IdHistory::find()
            .filter(entity::id_history::Column::TransferRequestId.eq(transfer_request_id))
            .one(self.db)
            .await
    }

    /// Gets the full rewrite trail of a student
    pub async fn get_many_by_student_id(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::id_history::Model>, DbErr> {
        entity::prelude::IdHistory::find()
            .filter(entity::id_history::Column::StudentId.eq(student_id))
            .all(self.db)
            .await
    }

    /// Gets the full rewrite trail of a teacher
    pub async fn get_many_by_teacher_id(
        &self,
        teacher_id: i32,
    ) -> Result<Vec<entity::id_history::Model>, DbErr> {
        entity::prelude::IdHistory::find()
            .filter(entity::id_history::Column::TeacherId.eq(teacher_id))
            .all(self.db)
            .await
    }
}
