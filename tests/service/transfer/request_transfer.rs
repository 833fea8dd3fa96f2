//! Tests for TransferService::request_student_transfer and
//! TransferService::request_teacher_transfer methods.
//!
//! This module verifies that transfer drafts capture the subject's current
//! posting, and that requests going nowhere or to unknown campuses are
//! rejected.

use entity::enums::{Shift, TransferStatus, TransferSubject, UserRole};
use registrar::{
    error::{transfer::TransferError, Error},
    model::dto::NewTransferRequest,
    service::transfer::TransferService,
};
use registrar_test_utils::prelude::*;
use sea_orm::DbErr;

/// Tests opening a transfer draft for a student.
///
/// Verifies that the student's current campus and shift are captured as the
/// `from` side and the request starts as a draft.
///
/// Expected: Ok with a draft from campus 6 morning to campus 3 afternoon
#[tokio::test]
async fn opens_draft_for_student() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    test.school()
        .insert_campus_with_id(6, "North Campus", "Karachi")
        .await?;
    test.school()
        .insert_campus_with_id(3, "South Campus", "Karachi")
        .await?;
    let requester = test
        .people()
        .insert_user_account("rashid.ahmed@example.test", "Rashid Ahmed", UserRole::Superadmin)
        .await?;
    let student = test
        .people()
        .insert_coded_student(6, None, "Bilal Ahmed", Shift::Morning, "C06M25-0042")
        .await?;

    let result = TransferService::new(&test.db)
        .request_student_transfer(
            student.id,
            NewTransferRequest {
                to_campus_id: 3,
                to_shift: "afternoon".to_string(),
                reason: "Family moved across town".to_string(),
                requested_by: requester.id,
            },
        )
        .await;

    assert!(result.is_ok());
    let request = result.unwrap();
    assert_eq!(request.status, TransferStatus::Draft);
    assert_eq!(request.subject_type, TransferSubject::Student);
    assert_eq!(request.student_id, Some(student.id));
    assert!(request.teacher_id.is_none());
    assert_eq!(request.from_campus_id, 6);
    assert_eq!(request.to_campus_id, 3);
    assert_eq!(request.from_shift, Shift::Morning);
    assert_eq!(request.to_shift, Shift::Afternoon);
    assert_eq!(request.requested_by, requester.id);
    assert!(request.decided_by.is_none());

    Ok(())
}

/// Tests opening a transfer draft for a teacher.
///
/// Expected: Ok with the teacher captured as the subject
#[tokio::test]
async fn opens_draft_for_teacher() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    test.school()
        .insert_campus_with_id(6, "North Campus", "Karachi")
        .await?;
    test.school()
        .insert_campus_with_id(3, "South Campus", "Karachi")
        .await?;
    let requester = test
        .people()
        .insert_user_account("rashid.ahmed@example.test", "Rashid Ahmed", UserRole::Superadmin)
        .await?;
    let teacher = test
        .people()
        .insert_coded_teacher(6, "Ayesha Khan", Shift::Morning, "C06-M-24-T-0311")
        .await?;

    let result = TransferService::new(&test.db)
        .request_teacher_transfer(
            teacher.id,
            NewTransferRequest {
                to_campus_id: 3,
                to_shift: "evening".to_string(),
                reason: "Staffing gap at the south campus".to_string(),
                requested_by: requester.id,
            },
        )
        .await;

    assert!(result.is_ok());
    let request = result.unwrap();
    assert_eq!(request.subject_type, TransferSubject::Teacher);
    assert_eq!(request.teacher_id, Some(teacher.id));
    assert!(request.student_id.is_none());

    Ok(())
}

/// Tests a transfer that changes only the shift.
///
/// Expected: Ok with the same campus on both sides
#[tokio::test]
async fn shift_only_transfer_is_allowed() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    test.school()
        .insert_campus_with_id(6, "North Campus", "Karachi")
        .await?;
    let requester = test
        .people()
        .insert_user_account("rashid.ahmed@example.test", "Rashid Ahmed", UserRole::Superadmin)
        .await?;
    let student = test
        .people()
        .insert_coded_student(6, None, "Bilal Ahmed", Shift::Morning, "C06M25-0042")
        .await?;

    let result = TransferService::new(&test.db)
        .request_student_transfer(
            student.id,
            NewTransferRequest {
                to_campus_id: 6,
                to_shift: "evening".to_string(),
                reason: "Schedule conflict with siblings".to_string(),
                requested_by: requester.id,
            },
        )
        .await;

    assert!(result.is_ok());
    let request = result.unwrap();
    assert_eq!(request.from_campus_id, request.to_campus_id);
    assert_ne!(request.from_shift, request.to_shift);

    Ok(())
}

/// Tests a transfer that changes nothing.
///
/// Expected: Err(NoDestinationChange)
#[tokio::test]
async fn rejects_transfer_to_same_place() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    test.school()
        .insert_campus_with_id(6, "North Campus", "Karachi")
        .await?;
    let requester = test
        .people()
        .insert_user_account("rashid.ahmed@example.test", "Rashid Ahmed", UserRole::Superadmin)
        .await?;
    let student = test
        .people()
        .insert_coded_student(6, None, "Bilal Ahmed", Shift::Morning, "C06M25-0042")
        .await?;

    let result = TransferService::new(&test.db)
        .request_student_transfer(
            student.id,
            NewTransferRequest {
                to_campus_id: 6,
                to_shift: "morning".to_string(),
                reason: "No actual move".to_string(),
                requested_by: requester.id,
            },
        )
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        Error::TransferError(TransferError::NoDestinationChange) => {}
        _ => panic!("Expected NoDestinationChange error"),
    }

    Ok(())
}

/// Tests a transfer to a campus that does not exist.
///
/// Expected: Err(RecordNotFound) naming the campus
#[tokio::test]
async fn rejects_unknown_destination_campus() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    test.school()
        .insert_campus_with_id(6, "North Campus", "Karachi")
        .await?;
    let requester = test
        .people()
        .insert_user_account("rashid.ahmed@example.test", "Rashid Ahmed", UserRole::Superadmin)
        .await?;
    let student = test
        .people()
        .insert_coded_student(6, None, "Bilal Ahmed", Shift::Morning, "C06M25-0042")
        .await?;

    let result = TransferService::new(&test.db)
        .request_student_transfer(
            student.id,
            NewTransferRequest {
                to_campus_id: 999,
                to_shift: "afternoon".to_string(),
                reason: "Typo in the campus number".to_string(),
                requested_by: requester.id,
            },
        )
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        Error::DbErr(DbErr::RecordNotFound(message)) => assert!(message.contains("999")),
        _ => panic!("Expected RecordNotFound error"),
    }

    Ok(())
}
