//! Tests for TransferService::cancel_request method.
//!
//! This module verifies cancellation from the draft and pending states, the
//! requester-only rule, and that decided requests stay decided.

use entity::enums::{Shift, TransferStatus, UserRole};
use registrar::{
    error::{transfer::TransferError, Error},
    model::dto::NewTransferRequest,
    service::transfer::TransferService,
};
use registrar_test_utils::prelude::*;

struct CancelScene {
    request_id: i32,
    requester_id: i32,
    approver_id: i32,
}

/// Inserts two campuses, a coded student, the receiving principal, and opens
/// a draft request.
async fn build_scene(test: &mut TestSetup) -> Result<CancelScene, TestError> {
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
    let principal = test.people().insert_principal(3, "Imran Shah").await?;

    let request = TransferService::new(&test.db)
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

    Ok(CancelScene {
        request_id: request.id,
        requester_id: requester.id,
        approver_id: principal.user_account_id,
    })
}

/// Tests cancelling a draft.
///
/// Verifies that cancellation is not a review decision: no reviewer or
/// decision timestamp is stamped.
///
/// Expected: Ok with status cancelled and decision fields empty
#[tokio::test]
async fn requester_cancels_draft() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;
    let scene = build_scene(&mut test).await?;

    let result = TransferService::new(&test.db)
        .cancel_request(scene.request_id, scene.requester_id)
        .await;

    assert!(result.is_ok());
    let request = result.unwrap();
    assert_eq!(request.status, TransferStatus::Cancelled);
    assert!(request.decided_by.is_none());
    assert!(request.decided_at.is_none());
    assert!(request.decision_note.is_none());

    Ok(())
}

/// Tests cancelling a request that is already pending review.
///
/// Expected: Ok with status cancelled
#[tokio::test]
async fn requester_cancels_pending_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;
    let scene = build_scene(&mut test).await?;

    let service = TransferService::new(&test.db);
    service
        .submit_request(scene.request_id, scene.requester_id)
        .await
        .unwrap();
    let result = service
        .cancel_request(scene.request_id, scene.requester_id)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().status, TransferStatus::Cancelled);

    Ok(())
}

/// Tests cancellation by someone other than the requester.
///
/// Expected: Err(NotRequester)
#[tokio::test]
async fn only_requester_may_cancel() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;
    let scene = build_scene(&mut test).await?;

    let result = TransferService::new(&test.db)
        .cancel_request(scene.request_id, scene.approver_id)
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        Error::TransferError(TransferError::NotRequester { id }) => {
            assert_eq!(id, scene.request_id)
        }
        _ => panic!("Expected NotRequester error"),
    }

    Ok(())
}

/// Tests cancelling a request that was already declined.
///
/// Expected: Err(InvalidTransition) with the decline untouched
#[tokio::test]
async fn cannot_cancel_declined_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;
    let scene = build_scene(&mut test).await?;

    let service = TransferService::new(&test.db);
    service
        .submit_request(scene.request_id, scene.requester_id)
        .await
        .unwrap();
    service
        .decline_request(scene.request_id, scene.approver_id, None)
        .await
        .unwrap();

    let result = service
        .cancel_request(scene.request_id, scene.requester_id)
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        Error::TransferError(TransferError::InvalidTransition { from, to, .. }) => {
            assert_eq!(from, "declined");
            assert_eq!(to, "cancelled");
        }
        _ => panic!("Expected InvalidTransition error"),
    }

    Ok(())
}
