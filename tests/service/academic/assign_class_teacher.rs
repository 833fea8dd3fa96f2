//! Tests for ClassroomService::assign_class_teacher method.
//!
//! This module verifies class teacher assignment, including the one-classroom
//! rule that releases a teacher's previous classroom link.

use entity::enums::{LevelStage, Shift};
use registrar::{error::Error, service::academic::ClassroomService};
use registrar_test_utils::prelude::*;
use sea_orm::{DbErr, EntityTrait};

/// Tests assigning a teacher to a classroom.
///
/// Expected: Ok with `class_teacher_id` set on the classroom
#[tokio::test]
async fn assigns_teacher_to_classroom() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    let campus = test.school().insert_campus("North Campus", "Karachi").await?;
    let level = test
        .school()
        .insert_level(campus.id, LevelStage::Primary, Shift::Morning)
        .await?;
    let grade = test.school().insert_grade(level.id, "Grade-3").await?;
    let classroom = test.school().insert_classroom(grade.id, "A").await?;
    let teacher = test
        .people()
        .insert_teacher(campus.id, "Ayesha Khan", Shift::Morning)
        .await?;

    let result = ClassroomService::new(&test.db)
        .assign_class_teacher(classroom.id, teacher.id)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().class_teacher_id, Some(teacher.id));

    Ok(())
}

/// Tests moving a teacher to a different classroom.
///
/// Verifies that assigning a teacher who already leads a classroom releases
/// the old link, keeping the teacher on at most one classroom.
///
/// Expected: Ok with the old classroom unassigned and the new one linked
#[tokio::test]
async fn moves_teacher_between_classrooms() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    let campus = test.school().insert_campus("North Campus", "Karachi").await?;
    let level = test
        .school()
        .insert_level(campus.id, LevelStage::Primary, Shift::Morning)
        .await?;
    let grade = test.school().insert_grade(level.id, "Grade-3").await?;
    let classroom_a = test.school().insert_classroom(grade.id, "A").await?;
    let classroom_b = test.school().insert_classroom(grade.id, "B").await?;
    let teacher = test
        .people()
        .insert_teacher(campus.id, "Ayesha Khan", Shift::Morning)
        .await?;

    let service = ClassroomService::new(&test.db);
    service
        .assign_class_teacher(classroom_a.id, teacher.id)
        .await
        .unwrap();
    let result = service.assign_class_teacher(classroom_b.id, teacher.id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().class_teacher_id, Some(teacher.id));

    // Verify the old classroom lost its teacher
    let db_classroom_a = entity::prelude::Classroom::find_by_id(classroom_a.id)
        .one(&test.db)
        .await?
        .expect("Classroom should exist");
    assert!(db_classroom_a.class_teacher_id.is_none());

    Ok(())
}

/// Tests assigning a teacher that does not exist.
///
/// Expected: Err(RecordNotFound) naming the teacher
#[tokio::test]
async fn fails_for_unknown_teacher() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    let campus = test.school().insert_campus("North Campus", "Karachi").await?;
    let level = test
        .school()
        .insert_level(campus.id, LevelStage::Primary, Shift::Morning)
        .await?;
    let grade = test.school().insert_grade(level.id, "Grade-3").await?;
    let classroom = test.school().insert_classroom(grade.id, "A").await?;

    let result = ClassroomService::new(&test.db)
        .assign_class_teacher(classroom.id, 999)
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        Error::DbErr(DbErr::RecordNotFound(message)) => assert!(message.contains("999")),
        _ => panic!("Expected RecordNotFound error"),
    }

    Ok(())
}
