//! Tests for CoordinatorService::create_coordinator method.
//!
//! This module verifies coordinator onboarding behavior, including employee
//! code generation from the shared sequence and adoption of levels that have
//! nobody assigned yet.

use entity::enums::{LevelStage, Shift};
use registrar::{
    model::dto::NewStaffMember,
    service::staff::{CoordinatorService, TeacherService},
};
use registrar_test_utils::prelude::*;
use sea_orm::EntityTrait;

/// Tests that coordinators draw from the same sequence as teachers.
///
/// Verifies that onboarding a teacher and then a coordinator produces
/// consecutive sequence numbers with different role letters.
///
/// Expected: Ok with the coordinator code ending in "-C-0002"
#[tokio::test]
async fn shares_employee_sequence_with_teachers() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    let campus = test.school().insert_campus("North Campus", "Karachi").await?;

    let teacher = TeacherService::new(&test.db)
        .create_teacher(NewStaffMember {
            campus_id: campus.id,
            name: "Ayesha Khan".to_string(),
            email: "ayesha.khan@example.test".to_string(),
            shift: "morning".to_string(),
        })
        .await
        .unwrap();

    let result = CoordinatorService::new(&test.db)
        .create_coordinator(NewStaffMember {
            campus_id: campus.id,
            name: "Sana Malik".to_string(),
            email: "sana.malik@example.test".to_string(),
            shift: "morning".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let coordinator = result.unwrap();

    assert!(teacher.employee_code.unwrap().ends_with("-T-0001"));
    assert!(coordinator.employee_code.unwrap().ends_with("-C-0002"));

    Ok(())
}

/// Tests adoption of unassigned levels on coordinator onboarding.
///
/// Verifies that levels on the coordinator's campus and shift with no
/// coordinator yet are linked to the new coordinator, while levels on other
/// shifts are left alone.
///
/// Expected: Ok with both morning levels adopted and the evening level untouched
#[tokio::test]
async fn adopts_unassigned_levels_on_same_shift() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    let campus = test.school().insert_campus("North Campus", "Karachi").await?;
    let morning_primary = test
        .school()
        .insert_level(campus.id, LevelStage::Primary, Shift::Morning)
        .await?;
    let morning_secondary = test
        .school()
        .insert_level(campus.id, LevelStage::Secondary, Shift::Morning)
        .await?;
    let evening_primary = test
        .school()
        .insert_level(campus.id, LevelStage::Primary, Shift::Evening)
        .await?;

    let result = CoordinatorService::new(&test.db)
        .create_coordinator(NewStaffMember {
            campus_id: campus.id,
            name: "Sana Malik".to_string(),
            email: "sana.malik@example.test".to_string(),
            shift: "morning".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let coordinator = result.unwrap();

    for level_id in [morning_primary.id, morning_secondary.id] {
        let level = entity::prelude::Level::find_by_id(level_id)
            .one(&test.db)
            .await?
            .expect("Level should exist");
        assert_eq!(level.coordinator_id, Some(coordinator.id));
    }

    let evening = entity::prelude::Level::find_by_id(evening_primary.id)
        .one(&test.db)
        .await?
        .expect("Level should exist");
    assert!(evening.coordinator_id.is_none());

    Ok(())
}

/// Tests that levels already assigned to a coordinator are not taken over.
///
/// Expected: Ok with the existing assignment left in place
#[tokio::test]
async fn leaves_assigned_levels_alone() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    let campus = test.school().insert_campus("North Campus", "Karachi").await?;
    let level = test
        .school()
        .insert_level(campus.id, LevelStage::Primary, Shift::Morning)
        .await?;

    let service = CoordinatorService::new(&test.db);

    // The first coordinator adopts the level
    let first = service
        .create_coordinator(NewStaffMember {
            campus_id: campus.id,
            name: "Hira Qureshi".to_string(),
            email: "hira.qureshi@example.test".to_string(),
            shift: "morning".to_string(),
        })
        .await
        .unwrap();

    let result = service
        .create_coordinator(NewStaffMember {
            campus_id: campus.id,
            name: "Sana Malik".to_string(),
            email: "sana.malik@example.test".to_string(),
            shift: "morning".to_string(),
        })
        .await;

    assert!(result.is_ok());

    let db_level = entity::prelude::Level::find_by_id(level.id)
        .one(&test.db)
        .await?
        .expect("Level should exist");
    assert_eq!(db_level.coordinator_id, Some(first.id));

    Ok(())
}
