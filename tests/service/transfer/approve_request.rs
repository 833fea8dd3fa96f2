//! Tests for TransferService::approve_request method.
//!
//! This module verifies transfer approval: the registration code rewrite that
//! keeps the sequence digits, the single history row per approval, atomic
//! rollback on failure, and the receiving-principal-only rule.

use chrono::{Datelike, Utc};
use entity::enums::{Shift, TransferStatus, UserRole};
use registrar::{
    data::id_history::IdHistoryRepository,
    error::{transfer::TransferError, Error},
    model::dto::NewTransferRequest,
    service::{academic::ClassroomService, transfer::TransferService},
};
use registrar_test_utils::prelude::*;
use sea_orm::EntityTrait;

struct ApproveScene {
    student_id: i32,
    request_id: i32,
    requester_id: i32,
    approver_id: i32,
}

/// Inserts two campuses, a student at campus 6 morning, the receiving
/// principal at campus 3, and a pending transfer to campus 3 afternoon.
async fn build_pending_student_transfer(
    test: &mut TestSetup,
    student_code: Option<&str>,
) -> Result<ApproveScene, TestError> {
    test.school()
        .insert_campus_with_id(6, "North Campus", "Karachi")
        .await?;
    test.school()
        .insert_campus_with_id(3, "South Campus", "Karachi")
        .await?;
    let requester = test
        .people()
        .insert_user_account(
            "rashid.ahmed@example.test",
            "Rashid Ahmed",
            UserRole::Superadmin,
        )
        .await?;
    let student = match student_code {
        Some(code) => {
            test.people()
                .insert_coded_student(6, None, "Bilal Ahmed", Shift::Morning, code)
                .await?
        }
        None => {
            test.people()
                .insert_student(6, None, "Bilal Ahmed", Shift::Morning)
                .await?
        }
    };
    let principal = test.people().insert_principal(3, "Imran Shah").await?;

    let service = TransferService::new(&test.db);
    let request = service
        .request_student_transfer(
            student.id,
            NewTransferRequest {
                to_campus_id: 3,
                to_shift: "afternoon".to_string(),
                reason: "Family moved across town".to_string(),
                requested_by: requester.id,
            },
        )
        .await
        .unwrap();
    service.submit_request(request.id, requester.id).await.unwrap();

    Ok(ApproveScene {
        student_id: student.id,
        request_id: request.id,
        requester_id: requester.id,
        approver_id: principal.user_account_id,
    })
}

/// Tests approving a student transfer.
///
/// Verifies that the student's code is rewritten for the new campus, shift
/// and year while the sequence digits carry over verbatim, that the student
/// row moves, and that the history row records every old and new segment.
///
/// Expected: Ok with new code "C03A<yy>-0042" and a full history row
#[tokio::test]
async fn approves_student_transfer_rewriting_code() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;
    let scene = build_pending_student_transfer(&mut test, Some("C06M25-0042")).await?;

    let result = TransferService::new(&test.db)
        .approve_request(scene.request_id, scene.approver_id, None)
        .await;

    assert!(result.is_ok());
    let outcome = result.unwrap();

    let year = Utc::now().year() % 100;
    let expected_code = format!("C03A{year:02}-0042");
    assert_eq!(outcome.new_code, expected_code);

    // Verify the student moved and carries the new code
    let student = entity::prelude::Student::find_by_id(scene.student_id)
        .one(&test.db)
        .await?
        .expect("Student should exist");
    assert_eq!(student.campus_id, 3);
    assert_eq!(student.shift, Shift::Afternoon);
    assert_eq!(student.student_code, Some(expected_code.clone()));

    // Verify the history row segments
    let history = outcome.history;
    assert_eq!(history.transfer_request_id, scene.request_id);
    assert_eq!(history.student_id, Some(scene.student_id));
    assert!(history.teacher_id.is_none());
    assert_eq!(history.old_code, "C06M25-0042");
    assert_eq!(history.new_code, expected_code);
    assert_eq!(history.old_campus_code, "C06");
    assert_eq!(history.new_campus_code, "C03");
    assert_eq!(history.old_shift_code, "M");
    assert_eq!(history.new_shift_code, "A");
    assert_eq!(history.old_year_code, "25");
    assert_eq!(history.new_year_code, format!("{year:02}"));
    assert!(history.old_role_code.is_none());
    assert!(history.new_role_code.is_none());
    assert_eq!(history.suffix, "0042");

    // Verify the decision stamp
    let request = entity::prelude::TransferRequest::find_by_id(scene.request_id)
        .one(&test.db)
        .await?
        .expect("Request should exist");
    assert_eq!(request.status, TransferStatus::Approved);
    assert_eq!(request.decided_by, Some(scene.approver_id));
    assert!(request.decided_at.is_some());

    Ok(())
}

/// Tests approving a teacher transfer.
///
/// Verifies that the role segment and sequence digits carry over into the
/// rewritten code and that the teacher's classroom link is released at the
/// old campus.
///
/// Expected: Ok with new code "C03-E-<yy>-T-0311" and the classroom freed
#[tokio::test]
async fn approves_teacher_transfer_preserving_role_and_suffix() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    test.school()
        .insert_campus_with_id(6, "North Campus", "Karachi")
        .await?;
    test.school()
        .insert_campus_with_id(3, "South Campus", "Karachi")
        .await?;
    let level = test
        .school()
        .insert_level(6, entity::enums::LevelStage::Primary, Shift::Morning)
        .await?;
    let grade = test.school().insert_grade(level.id, "Grade-3").await?;
    let classroom = test.school().insert_classroom(grade.id, "A").await?;
    let requester = test
        .people()
        .insert_user_account(
            "rashid.ahmed@example.test",
            "Rashid Ahmed",
            UserRole::Superadmin,
        )
        .await?;
    let teacher = test
        .people()
        .insert_coded_teacher(6, "Ayesha Khan", Shift::Morning, "C06-M-24-T-0311")
        .await?;
    let principal = test.people().insert_principal(3, "Imran Shah").await?;

    ClassroomService::new(&test.db)
        .assign_class_teacher(classroom.id, teacher.id)
        .await
        .unwrap();

    let service = TransferService::new(&test.db);
    let request = service
        .request_teacher_transfer(
            teacher.id,
            NewTransferRequest {
                to_campus_id: 3,
                to_shift: "evening".to_string(),
                reason: "Staffing gap at the south campus".to_string(),
                requested_by: requester.id,
            },
        )
        .await
        .unwrap();
    service.submit_request(request.id, requester.id).await.unwrap();

    let result = service
        .approve_request(request.id, principal.user_account_id, None)
        .await;

    assert!(result.is_ok());
    let outcome = result.unwrap();

    let year = Utc::now().year() % 100;
    let expected_code = format!("C03-E-{year:02}-T-0311");
    assert_eq!(outcome.new_code, expected_code);
    assert_eq!(outcome.history.old_role_code, Some("T".to_string()));
    assert_eq!(outcome.history.new_role_code, Some("T".to_string()));
    assert_eq!(outcome.history.suffix, "0311");

    // Verify the teacher moved
    let db_teacher = entity::prelude::Teacher::find_by_id(teacher.id)
        .one(&test.db)
        .await?
        .expect("Teacher should exist");
    assert_eq!(db_teacher.campus_id, 3);
    assert_eq!(db_teacher.shift, Shift::Evening);
    assert_eq!(db_teacher.employee_code, Some(expected_code.clone()));

    // Verify the classroom at the old campus was released
    let db_classroom = entity::prelude::Classroom::find_by_id(classroom.id)
        .one(&test.db)
        .await?
        .expect("Classroom should exist");
    assert!(db_classroom.class_teacher_id.is_none());

    // Verify the persisted rewrite trail
    let trail = IdHistoryRepository::new(&test.db)
        .get_many_by_teacher_id(teacher.id)
        .await?;
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].old_code, "C06-M-24-T-0311");
    assert_eq!(trail[0].new_code, expected_code);

    Ok(())
}

/// Tests that an approval writes exactly one history row.
///
/// Verifies that a second approval attempt fails on the terminal state and
/// leaves the history untouched.
///
/// Expected: one history row before and after the failed re-approval
#[tokio::test]
async fn records_exactly_one_history_row() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;
    let scene = build_pending_student_transfer(&mut test, Some("C06M25-0042")).await?;

    let service = TransferService::new(&test.db);
    service
        .approve_request(scene.request_id, scene.approver_id, None)
        .await
        .unwrap();

    let history = IdHistoryRepository::new(&test.db);
    let trail = history.get_many_by_student_id(scene.student_id).await?;
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].transfer_request_id, scene.request_id);

    // A second approval must fail on the terminal state
    let result = service
        .approve_request(scene.request_id, scene.approver_id, None)
        .await;
    assert!(result.is_err());
    match result.unwrap_err() {
        Error::TransferError(TransferError::InvalidTransition { from, .. }) => {
            assert_eq!(from, "approved")
        }
        _ => panic!("Expected InvalidTransition error"),
    }

    let trail = history.get_many_by_student_id(scene.student_id).await?;
    assert_eq!(trail.len(), 1);

    Ok(())
}

/// Tests approving a transfer for a student who never received a code.
///
/// Verifies that the whole approval rolls back: the student stays at the old
/// campus, no history row is written, and the request remains pending.
///
/// Expected: Err(SubjectNotCoded) with nothing changed
#[tokio::test]
async fn approving_uncoded_subject_fails_and_rolls_back() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;
    let scene = build_pending_student_transfer(&mut test, None).await?;

    let result = TransferService::new(&test.db)
        .approve_request(scene.request_id, scene.approver_id, None)
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        Error::TransferError(TransferError::SubjectNotCoded { id }) => {
            assert_eq!(id, scene.request_id)
        }
        _ => panic!("Expected SubjectNotCoded error"),
    }

    // Verify nothing moved
    let student = entity::prelude::Student::find_by_id(scene.student_id)
        .one(&test.db)
        .await?
        .expect("Student should exist");
    assert_eq!(student.campus_id, 6);
    assert_eq!(student.shift, Shift::Morning);
    assert!(student.student_code.is_none());

    let history = IdHistoryRepository::new(&test.db)
        .get_by_transfer_request_id(scene.request_id)
        .await?;
    assert!(history.is_none());

    let request = entity::prelude::TransferRequest::find_by_id(scene.request_id)
        .one(&test.db)
        .await?
        .expect("Request should exist");
    assert_eq!(request.status, TransferStatus::Pending);

    Ok(())
}

/// Tests an approval by someone other than the receiving campus principal.
///
/// Expected: Err(NotReceivingApprover) with the request still pending
#[tokio::test]
async fn only_receiving_principal_may_approve() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;
    let scene = build_pending_student_transfer(&mut test, Some("C06M25-0042")).await?;

    let result = TransferService::new(&test.db)
        .approve_request(scene.request_id, scene.requester_id, None)
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        Error::TransferError(TransferError::NotReceivingApprover { id }) => {
            assert_eq!(id, scene.request_id)
        }
        _ => panic!("Expected NotReceivingApprover error"),
    }

    let request = entity::prelude::TransferRequest::find_by_id(scene.request_id)
        .one(&test.db)
        .await?
        .expect("Request should exist");
    assert_eq!(request.status, TransferStatus::Pending);

    Ok(())
}

/// Tests approving with a reviewer note.
///
/// Expected: Ok with the note stored on the decision
#[tokio::test]
async fn approval_note_is_stored() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;
    let scene = build_pending_student_transfer(&mut test, Some("C06M25-0042")).await?;

    let result = TransferService::new(&test.db)
        .approve_request(
            scene.request_id,
            scene.approver_id,
            Some("Welcome to the south campus".to_string()),
        )
        .await;

    assert!(result.is_ok());

    let request = entity::prelude::TransferRequest::find_by_id(scene.request_id)
        .one(&test.db)
        .await?
        .expect("Request should exist");
    assert_eq!(
        request.decision_note,
        Some("Welcome to the south campus".to_string())
    );

    Ok(())
}
