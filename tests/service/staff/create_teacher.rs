//! Tests for TeacherService::create_teacher method.
//!
//! This module verifies teacher onboarding behavior, including employee code
//! generation, login account creation and reuse, and shift normalization.

use chrono::{Datelike, Utc};
use entity::enums::{Shift, UserRole};
use registrar::{model::dto::NewStaffMember, service::staff::TeacherService};
use registrar_test_utils::prelude::*;
use sea_orm::EntityTrait;

/// Tests onboarding a teacher at a campus.
///
/// Verifies that the teacher receives an employee code carrying the campus
/// number, shift letter, current year, role letter, and the first sequence
/// number.
///
/// Expected: Ok with code "C06-M-<yy>-T-0001"
#[tokio::test]
async fn creates_teacher_with_employee_code() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    test.school()
        .insert_campus_with_id(6, "North Campus", "Karachi")
        .await?;

    let result = TeacherService::new(&test.db)
        .create_teacher(NewStaffMember {
            campus_id: 6,
            name: "Ayesha Khan".to_string(),
            email: "ayesha.khan@example.test".to_string(),
            shift: "morning".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let teacher = result.unwrap();

    let year = Utc::now().year() % 100;
    assert_eq!(
        teacher.employee_code,
        Some(format!("C06-M-{year:02}-T-0001"))
    );

    // Verify a login account was created for the teacher
    let account = entity::prelude::UserAccount::find_by_id(teacher.user_account_id)
        .one(&test.db)
        .await?
        .expect("Account should exist");
    assert_eq!(account.email, "ayesha.khan@example.test");
    assert_eq!(account.role, UserRole::Teacher);

    Ok(())
}

/// Tests onboarding a teacher whose email already has an account.
///
/// Verifies that the existing account is reused instead of creating a
/// duplicate.
///
/// Expected: Ok with `user_account_id` pointing at the existing account
#[tokio::test]
async fn reuses_existing_account_by_email() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    let campus = test.school().insert_campus("North Campus", "Karachi").await?;
    let account = test
        .people()
        .insert_user_account("ayesha.khan@example.test", "Ayesha Khan", UserRole::Teacher)
        .await?;

    let result = TeacherService::new(&test.db)
        .create_teacher(NewStaffMember {
            campus_id: campus.id,
            name: "Ayesha Khan".to_string(),
            email: "ayesha.khan@example.test".to_string(),
            shift: "morning".to_string(),
        })
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().user_account_id, account.id);

    Ok(())
}

/// Tests legacy shift spellings on staff rosters.
///
/// Verifies that "both" normalizes to the morning shift so exactly one code
/// is issued.
///
/// Expected: Ok with a morning shift code segment
#[tokio::test]
async fn normalizes_legacy_shift_spelling() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    let campus = test.school().insert_campus("North Campus", "Karachi").await?;

    let result = TeacherService::new(&test.db)
        .create_teacher(NewStaffMember {
            campus_id: campus.id,
            name: "Ayesha Khan".to_string(),
            email: "ayesha.khan@example.test".to_string(),
            shift: "both".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let teacher = result.unwrap();
    assert_eq!(teacher.shift, Shift::Morning);
    assert!(teacher.employee_code.unwrap().contains("-M-"));

    Ok(())
}
