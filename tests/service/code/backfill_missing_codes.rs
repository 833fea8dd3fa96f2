//! Tests for CodeService::backfill_missing_codes method.
//!
//! This module verifies the backfill sweep that assigns codes to every person
//! record still missing one, for example after campus code exhaustion or bulk
//! imports.

use entity::enums::Shift;
use registrar::service::code::{BackfillReport, CodeService};
use registrar_test_utils::prelude::*;
use sea_orm::{EntityTrait, TransactionTrait};

/// Tests backfilling codes across every person table.
///
/// Verifies that uncoded teachers, coordinators, principals and students all
/// receive codes while already-coded records are left alone.
///
/// Expected: Ok with a report of 2 teachers, 1 coordinator, 1 principal, 2 students
#[tokio::test]
async fn backfills_every_person_missing_a_code() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    test.school()
        .insert_campus_with_id(2, "North Campus", "Karachi")
        .await?;

    let teacher_a = test
        .people()
        .insert_teacher(2, "Ayesha Khan", Shift::Morning)
        .await?;
    let teacher_b = test
        .people()
        .insert_teacher(2, "Fatima Noor", Shift::Afternoon)
        .await?;
    let coded_teacher = test
        .people()
        .insert_coded_teacher(2, "Zainab Ali", Shift::Morning, "C02-M-24-T-0311")
        .await?;
    let coordinator = test
        .people()
        .insert_coordinator(2, "Sana Malik", Shift::Morning)
        .await?;
    let principal = test.people().insert_principal(2, "Imran Shah").await?;
    let student_a = test
        .people()
        .insert_student(2, None, "Bilal Ahmed", Shift::Morning)
        .await?;
    let student_b = test
        .people()
        .insert_student(2, None, "Hamza Tariq", Shift::Evening)
        .await?;

    let txn = test.db.begin().await?;
    let result = CodeService::new(&txn).backfill_missing_codes().await;
    assert!(result.is_ok());
    txn.commit().await?;

    assert_eq!(
        result.unwrap(),
        BackfillReport {
            teachers: 2,
            coordinators: 1,
            principals: 1,
            students: 2,
        }
    );

    // Verify the uncoded records were filled in
    for teacher_id in [teacher_a.id, teacher_b.id] {
        let teacher = entity::prelude::Teacher::find_by_id(teacher_id)
            .one(&test.db)
            .await?
            .expect("Teacher should exist");
        assert!(teacher.employee_code.is_some());
    }
    let coordinator = entity::prelude::Coordinator::find_by_id(coordinator.id)
        .one(&test.db)
        .await?
        .expect("Coordinator should exist");
    assert!(coordinator.employee_code.is_some());
    let principal = entity::prelude::Principal::find_by_id(principal.id)
        .one(&test.db)
        .await?
        .expect("Principal should exist");
    assert!(principal.employee_code.is_some());
    for student_id in [student_a.id, student_b.id] {
        let student = entity::prelude::Student::find_by_id(student_id)
            .one(&test.db)
            .await?
            .expect("Student should exist");
        assert!(student.student_code.is_some());
    }

    // Verify the already-coded teacher kept its code
    let untouched = entity::prelude::Teacher::find_by_id(coded_teacher.id)
        .one(&test.db)
        .await?
        .expect("Teacher should exist");
    assert_eq!(untouched.employee_code, Some("C02-M-24-T-0311".to_string()));

    Ok(())
}

/// Tests backfilling when nothing is missing.
///
/// Expected: Ok with an all-zero report
#[tokio::test]
async fn reports_zero_when_nothing_is_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_school_tables().build().await?;

    let txn = test.db.begin().await?;
    let result = CodeService::new(&txn).backfill_missing_codes().await;
    txn.commit().await?;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), BackfillReport::default());

    Ok(())
}
