//! Transfer workflow and registration code rewrite.
//!
//! A request moves through `draft -> pending -> approved | declined |
//! cancelled`. Approval rewrites the subject's code for the destination campus
//! and shift while carrying the sequence digits verbatim, and records exactly
//! one history row per approval; the sequence is the permanent anchor back to
//! the original counter value, so old report cards and ID cards stay
//! traceable.

use chrono::{Datelike, Utc};
use entity::enums::{Shift, TransferStatus, TransferSubject};
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::data::id_history::{IdHistoryRepository, NewIdHistory};
use crate::data::school::{CampusRepository, ClassroomRepository};
use crate::data::staff::{PrincipalRepository, TeacherRepository};
use crate::data::student::StudentRepository;
use crate::data::transfer::{TransferDraft, TransferRequestRepository};
use crate::error::transfer::TransferError;
use crate::error::Error;
use crate::model::db::{IdHistoryModel, TransferRequestModel};
use crate::model::dto::NewTransferRequest;
use crate::service::code::format::{rewrite_employee_code, rewrite_student_code};
use crate::service::code::parse::{parse_employee_code, parse_student_code};

/// Note stored when a decline is submitted without one.
const DEFAULT_DECLINE_NOTE: &str = "Declined by receiving campus";

/// Result of an approved transfer.
#[derive(Debug)]
pub struct TransferOutcome {
    /// The subject's code after the rewrite.
    pub new_code: String,
    /// The audit row recording old and new code segments.
    pub history: IdHistoryModel,
}

/// Runs the transfer request state machine.
pub struct TransferService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransferService<'a> {
    /// Creates a new instance of [`TransferService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a draft request to move a student to another campus or shift.
    ///
    /// The student's current campus and shift are captured as the `from` side;
    /// a request that changes neither is rejected.
    pub async fn request_student_transfer(
        &self,
        student_id: i32,
        new_request: NewTransferRequest,
    ) -> Result<TransferRequestModel, Error> {
        let to_shift = parse_shift(&new_request.to_shift)?;

        let student = StudentRepository::new(self.db)
            .get(student_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Student {student_id} not found")))?;

        ensure_destination_campus(self.db, new_request.to_campus_id).await?;

        if student.campus_id == new_request.to_campus_id && student.shift == to_shift {
            return Err(TransferError::NoDestinationChange.into());
        }

        let request = TransferRequestRepository::new(self.db)
            .create(TransferDraft {
                subject_type: TransferSubject::Student,
                student_id: Some(student_id),
                teacher_id: None,
                from_campus_id: student.campus_id,
                to_campus_id: new_request.to_campus_id,
                from_shift: student.shift,
                to_shift,
                reason: new_request.reason,
                requested_by: new_request.requested_by,
            })
            .await?;

        Ok(request)
    }

    /// Opens a draft request to move a teacher to another campus or shift.
    pub async fn request_teacher_transfer(
        &self,
        teacher_id: i32,
        new_request: NewTransferRequest,
    ) -> Result<TransferRequestModel, Error> {
        let to_shift = parse_shift(&new_request.to_shift)?;

        let teacher = TeacherRepository::new(self.db)
            .get(teacher_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Teacher {teacher_id} not found")))?;

        ensure_destination_campus(self.db, new_request.to_campus_id).await?;

        if teacher.campus_id == new_request.to_campus_id && teacher.shift == to_shift {
            return Err(TransferError::NoDestinationChange.into());
        }

        let request = TransferRequestRepository::new(self.db)
            .create(TransferDraft {
                subject_type: TransferSubject::Teacher,
                student_id: None,
                teacher_id: Some(teacher_id),
                from_campus_id: teacher.campus_id,
                to_campus_id: new_request.to_campus_id,
                from_shift: teacher.shift,
                to_shift,
                reason: new_request.reason,
                requested_by: new_request.requested_by,
            })
            .await?;

        Ok(request)
    }

    /// Submits a draft request for review by the receiving campus.
    ///
    /// Only the requester may submit.
    pub async fn submit_request(
        &self,
        request_id: i32,
        actor: i32,
    ) -> Result<TransferRequestModel, Error> {
        let txn = self.db.begin().await?;

        let requests = TransferRequestRepository::new(&txn);
        let request = get_request_for_update(&requests, request_id).await?;

        ensure_requester(&request, actor)?;
        ensure_transition(&request, TransferStatus::Pending)?;

        let request = requests
            .set_status(request_id, TransferStatus::Pending)
            .await?
            .ok_or_else(|| request_vanished(request_id))?;

        txn.commit().await?;

        Ok(request)
    }

    /// Cancels a request that has not been decided yet.
    ///
    /// Only the requester may cancel. Cancellation is not a review decision,
    /// so no reviewer or decision timestamp is stamped.
    pub async fn cancel_request(
        &self,
        request_id: i32,
        actor: i32,
    ) -> Result<TransferRequestModel, Error> {
        let txn = self.db.begin().await?;

        let requests = TransferRequestRepository::new(&txn);
        let request = get_request_for_update(&requests, request_id).await?;

        ensure_requester(&request, actor)?;
        ensure_transition(&request, TransferStatus::Cancelled)?;

        let request = requests
            .set_status(request_id, TransferStatus::Cancelled)
            .await?
            .ok_or_else(|| request_vanished(request_id))?;

        txn.commit().await?;

        Ok(request)
    }

    /// Declines a pending request.
    ///
    /// Only the destination campus principal may decline. A note is stored
    /// with the decision; without one a default is recorded.
    pub async fn decline_request(
        &self,
        request_id: i32,
        actor: i32,
        note: Option<String>,
    ) -> Result<TransferRequestModel, Error> {
        let txn = self.db.begin().await?;

        let requests = TransferRequestRepository::new(&txn);
        let request = get_request_for_update(&requests, request_id).await?;

        ensure_transition(&request, TransferStatus::Declined)?;
        ensure_receiving_approver(&txn, &request, actor).await?;

        let note = note.unwrap_or_else(|| DEFAULT_DECLINE_NOTE.to_string());
        let request = requests
            .set_decision(request_id, TransferStatus::Declined, actor, Some(note))
            .await?
            .ok_or_else(|| request_vanished(request_id))?;

        txn.commit().await?;

        Ok(request)
    }

    /// Approves a pending request and rewrites the subject's code.
    ///
    /// Only the destination campus principal may approve. The rewrite, the
    /// history row and the decision commit or roll back as one unit; a failure
    /// at any point leaves the subject and its code untouched.
    pub async fn approve_request(
        &self,
        request_id: i32,
        actor: i32,
        note: Option<String>,
    ) -> Result<TransferOutcome, Error> {
        let txn = self.db.begin().await?;

        let requests = TransferRequestRepository::new(&txn);
        let request = get_request_for_update(&requests, request_id).await?;

        ensure_transition(&request, TransferStatus::Approved)?;
        ensure_receiving_approver(&txn, &request, actor).await?;

        let (entry, new_code) = match request.subject_type {
            TransferSubject::Student => apply_student_rewrite(&txn, &request).await?,
            TransferSubject::Teacher => apply_teacher_rewrite(&txn, &request).await?,
        };

        let history = IdHistoryRepository::new(&txn).create(entry).await?;

        requests
            .set_decision(request_id, TransferStatus::Approved, actor, note)
            .await?
            .ok_or_else(|| request_vanished(request_id))?;

        txn.commit().await?;

        Ok(TransferOutcome { new_code, history })
    }

    /// Lists the pending requests awaiting a campus's decision.
    ///
    /// Drafts and decided requests are excluded; this is the receiving
    /// principal's review queue.
    pub async fn pending_requests_for_campus(
        &self,
        campus_id: i32,
    ) -> Result<Vec<TransferRequestModel>, Error> {
        let requests = TransferRequestRepository::new(self.db)
            .get_many_pending_for_campus(campus_id)
            .await?;

        Ok(requests)
    }
}

fn parse_shift(input: &str) -> Result<Shift, Error> {
    Shift::from_input(input).ok_or_else(|| Error::ParseError(format!("Unknown shift: {input}")))
}

async fn ensure_destination_campus(db: &DatabaseConnection, campus_id: i32) -> Result<(), Error> {
    CampusRepository::new(db)
        .get(campus_id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Campus {campus_id} not found")))?;

    Ok(())
}

async fn get_request_for_update(
    requests: &TransferRequestRepository<'_, DatabaseTransaction>,
    request_id: i32,
) -> Result<TransferRequestModel, Error> {
    let request = requests
        .get_for_update(request_id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Transfer request {request_id} not found")))?;

    Ok(request)
}

fn ensure_requester(request: &TransferRequestModel, actor: i32) -> Result<(), Error> {
    if request.requested_by != actor {
        return Err(TransferError::NotRequester { id: request.id }.into());
    }

    Ok(())
}

fn ensure_transition(request: &TransferRequestModel, to: TransferStatus) -> Result<(), Error> {
    if !request.status.can_transition_to(to) {
        return Err(TransferError::InvalidTransition {
            id: request.id,
            from: request.status.as_str().to_string(),
            to: to.as_str().to_string(),
        }
        .into());
    }

    Ok(())
}

async fn ensure_receiving_approver(
    txn: &DatabaseTransaction,
    request: &TransferRequestModel,
    actor: i32,
) -> Result<(), Error> {
    let principal = PrincipalRepository::new(txn)
        .get_by_campus_id(request.to_campus_id)
        .await?
        .ok_or(TransferError::NoReceivingApprover {
            campus_id: request.to_campus_id,
        })?;

    if principal.user_account_id != actor {
        return Err(TransferError::NotReceivingApprover { id: request.id }.into());
    }

    Ok(())
}

fn request_vanished(request_id: i32) -> Error {
    // The row was just read under lock, so this only fires on a bug.
    Error::InternalError(format!(
        "Transfer request {request_id} disappeared mid-transaction"
    ))
}

async fn apply_student_rewrite(
    txn: &DatabaseTransaction,
    request: &TransferRequestModel,
) -> Result<(NewIdHistory, String), Error> {
    let student_id = request.student_id.ok_or_else(|| {
        Error::InternalError(format!(
            "Student transfer request {} has no student",
            request.id
        ))
    })?;

    let students = StudentRepository::new(txn);
    let student = students
        .get(student_id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Student {student_id} not found")))?;

    let old_code = student
        .student_code
        .ok_or(TransferError::SubjectNotCoded { id: request.id })?;
    let old = parse_student_code(&old_code)?;

    let new_code = rewrite_student_code(
        request.to_campus_id,
        request.to_shift,
        Utc::now().year(),
        &old.sequence,
    );
    let new = parse_student_code(&new_code)?;

    students
        .update_assignment(student_id, request.to_campus_id, request.to_shift, &new_code)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Student {student_id} not found")))?;

    let entry = NewIdHistory {
        transfer_request_id: request.id,
        student_id: Some(student_id),
        teacher_id: None,
        old_code,
        new_code: new_code.clone(),
        old_campus_code: old.campus_code,
        new_campus_code: new.campus_code,
        old_shift_code: old.shift_code,
        new_shift_code: new.shift_code,
        old_year_code: old.year_code,
        new_year_code: new.year_code,
        old_role_code: None,
        new_role_code: None,
        suffix: old.sequence,
    };

    Ok((entry, new_code))
}

async fn apply_teacher_rewrite(
    txn: &DatabaseTransaction,
    request: &TransferRequestModel,
) -> Result<(NewIdHistory, String), Error> {
    let teacher_id = request.teacher_id.ok_or_else(|| {
        Error::InternalError(format!(
            "Teacher transfer request {} has no teacher",
            request.id
        ))
    })?;

    let teachers = TeacherRepository::new(txn);
    let teacher = teachers
        .get(teacher_id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Teacher {teacher_id} not found")))?;

    let old_code = teacher
        .employee_code
        .ok_or(TransferError::SubjectNotCoded { id: request.id })?;
    let old = parse_employee_code(&old_code)?;

    let role_code = old.role_code.clone().ok_or_else(|| {
        Error::InternalError(format!("Employee code {old_code} parsed without a role segment"))
    })?;

    let new_code = rewrite_employee_code(
        request.to_campus_id,
        request.to_shift,
        Utc::now().year(),
        &role_code,
        &old.sequence,
    );
    let new = parse_employee_code(&new_code)?;

    // The class teacher link stays at the old campus.
    ClassroomRepository::new(txn)
        .release_class_teacher(teacher_id)
        .await?;

    teachers
        .update_assignment(teacher_id, request.to_campus_id, request.to_shift, &new_code)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Teacher {teacher_id} not found")))?;

    let entry = NewIdHistory {
        transfer_request_id: request.id,
        student_id: None,
        teacher_id: Some(teacher_id),
        old_code,
        new_code: new_code.clone(),
        old_campus_code: old.campus_code,
        new_campus_code: new.campus_code,
        old_shift_code: old.shift_code,
        new_shift_code: new.shift_code,
        old_year_code: old.year_code,
        new_year_code: new.year_code,
        old_role_code: old.role_code,
        new_role_code: new.role_code,
        suffix: old.sequence,
    };

    Ok((entry, new_code))
}
