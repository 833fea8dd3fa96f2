//! Tests for TransferService::pending_requests_for_campus method.

use entity::enums::{Shift, UserRole};
use registrar::{model::dto::NewTransferRequest, service::transfer::TransferService};
use registrar_test_utils::prelude::*;

/// Tests the review queue for a receiving campus.
///
/// Verifies that only submitted requests bound for the campus appear: drafts
/// and requests aimed at other campuses stay out.
///
/// Expected: exactly the one pending request for campus 3
#[tokio::test]
async fn lists_only_pending_requests_for_the_campus() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    test.school()
        .insert_campus_with_id(6, "North Campus", "Karachi")
        .await?;
    test.school()
        .insert_campus_with_id(3, "South Campus", "Karachi")
        .await?;
    test.school()
        .insert_campus_with_id(4, "East Campus", "Karachi")
        .await?;
    let requester = test
        .people()
        .insert_user_account(
            "rashid.ahmed@example.test",
            "Rashid Ahmed",
            UserRole::Superadmin,
        )
        .await?;
    let first = test
        .people()
        .insert_student(6, None, "Bilal Ahmed", Shift::Morning)
        .await?;
    let second = test
        .people()
        .insert_student(6, None, "Sana Tariq", Shift::Morning)
        .await?;
    let third = test
        .people()
        .insert_student(6, None, "Omar Siddiqui", Shift::Morning)
        .await?;

    let service = TransferService::new(&test.db);
    let submitted = service
        .request_student_transfer(
            first.id,
            NewTransferRequest {
                to_campus_id: 3,
                to_shift: "afternoon".to_string(),
                reason: "Family moved across town".to_string(),
                requested_by: requester.id,
            },
        )
        .await
        .unwrap();
    service
        .submit_request(submitted.id, requester.id)
        .await
        .unwrap();

    // Stays a draft
    service
        .request_student_transfer(
            second.id,
            NewTransferRequest {
                to_campus_id: 3,
                to_shift: "afternoon".to_string(),
                reason: "Sibling already enrolled there".to_string(),
                requested_by: requester.id,
            },
        )
        .await
        .unwrap();

    // Pending, but bound elsewhere
    let elsewhere = service
        .request_student_transfer(
            third.id,
            NewTransferRequest {
                to_campus_id: 4,
                to_shift: "morning".to_string(),
                reason: "Shorter commute".to_string(),
                requested_by: requester.id,
            },
        )
        .await
        .unwrap();
    service
        .submit_request(elsewhere.id, requester.id)
        .await
        .unwrap();

    let queue = service.pending_requests_for_campus(3).await.unwrap();

    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, submitted.id);
    assert_eq!(queue[0].student_id, Some(first.id));

    Ok(())
}

/// Tests that a decided request leaves the review queue.
///
/// Expected: an empty queue after the principal declines
#[tokio::test]
async fn decided_requests_leave_the_queue() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

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
    let student = test
        .people()
        .insert_student(6, None, "Bilal Ahmed", Shift::Morning)
        .await?;
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
    service
        .submit_request(request.id, requester.id)
        .await
        .unwrap();

    assert_eq!(
        service.pending_requests_for_campus(3).await.unwrap().len(),
        1
    );

    service
        .decline_request(request.id, principal.user_account_id, None)
        .await
        .unwrap();

    let queue = service.pending_requests_for_campus(3).await.unwrap();
    assert!(queue.is_empty());

    Ok(())
}
