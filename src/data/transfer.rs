use chrono::Utc;
use entity::enums::{Shift, TransferStatus, TransferSubject};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QuerySelect,
};

/// Field set captured when a transfer request is opened.
pub struct TransferDraft {
    /// Whether the request moves a student or a teacher.
    pub subject_type: TransferSubject,
    /// Student being moved; set when `subject_type` is `Student`.
    pub student_id: Option<i32>,
    /// Teacher being moved; set when `subject_type` is `Teacher`.
    pub teacher_id: Option<i32>,
    /// Campus the subject currently belongs to.
    pub from_campus_id: i32,
    /// Campus the subject would move to.
    pub to_campus_id: i32,
    /// Shift the subject currently works or attends.
    pub from_shift: Shift,
    /// Shift the subject would move to.
    pub to_shift: Shift,
    /// Requester's justification.
    pub reason: String,
    /// Account opening the request.
    pub requested_by: i32,
}

/// Queries for the transfer request table.
pub struct TransferRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransferRequestRepository<'a, C> {
    /// Creates a new instance of [`TransferRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a transfer request in draft status
    pub async fn create(
        &self,
        draft: TransferDraft,
    ) -> Result<entity::transfer_request::Model, DbErr> {
        let request = entity::transfer_request::ActiveModel {
            subject_type: ActiveValue::Set(draft.subject_type),
            student_id: ActiveValue::Set(draft.student_id),
            teacher_id: ActiveValue::Set(draft.teacher_id),
            from_campus_id: ActiveValue::Set(draft.from_campus_id),
            to_campus_id: ActiveValue::Set(draft.to_campus_id),
            from_shift: ActiveValue::Set(draft.from_shift),
            to_shift: ActiveValue::Set(draft.to_shift),
            reason: ActiveValue::Set(draft.reason),
            status: ActiveValue::Set(TransferStatus::Draft),
            requested_by: ActiveValue::Set(draft.requested_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        request.insert(self.db).await
    }

    /// Gets a transfer request by ID
    pub async fn get(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::transfer_request::Model>, DbErr> {
        entity::prelude::TransferRequest::find_by_id(request_id)
            .one(self.db)
            .await
    }

    /// Gets a transfer request by ID, holding an exclusive row lock
    ///
    /// Used inside the approval transaction so two reviewers cannot decide the
    /// same request concurrently.
    pub async fn get_for_update(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::transfer_request::Model>, DbErr> {
        entity::prelude::TransferRequest::find_by_id(request_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Gets the pending requests waiting on a destination campus
    pub async fn get_many_pending_for_campus(
        &self,
        to_campus_id: i32,
    ) -> Result<Vec<entity::transfer_request::Model>, DbErr> {
        entity::prelude::TransferRequest::find()
            .filter(entity::transfer_request::Column::ToCampusId.eq(to_campus_id))
            .filter(entity::transfer_request::Column::Status.eq(TransferStatus::Pending))
            .all(self.db)
            .await
    }

    /// Moves a request to a new status without recording a decision
    pub async fn set_status(
        &self,
        request_id: i32,
        status: TransferStatus,
    ) -> Result<Option<entity::transfer_request::Model>, DbErr> {
        let request = match self.get(request_id).await? {
            Some(request) => request,
            None => return Ok(None),
        };

        let mut request_am = request.into_active_model();
        request_am.status = ActiveValue::Set(status);
        request_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let request = request_am.update(self.db).await?;

        Ok(Some(request))
    }

    /// Moves a request to a decided status, stamping reviewer and timestamp
    pub async fn set_decision(
        &self,
        request_id: i32,
        status: TransferStatus,
        decided_by: i32,
        decision_note: Option<String>,
    ) -> Result<Option<entity::transfer_request::Model>, DbErr> {
        let request = match self.get(request_id).await? {
            Some(request) => request,
            None => return Ok(None),
        };

        let mut request_am = request.into_active_model();
        request_am.status = ActiveValue::Set(status);
        request_am.decided_by = ActiveValue::Set(Some(decided_by));
        request_am.decided_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        request_am.decision_note = ActiveValue::Set(decision_note);
        request_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let request = request_am.update(self.db).await?;

        Ok(Some(request))
    }
}
