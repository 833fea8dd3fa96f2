//! Tests for AttendanceService::record_attendance method.
//!
//! This module verifies attendance recording behavior, including one row per
//! student per day with overwrite on re-entry, monthly summary maintenance in
//! the same transaction, and status input normalization.

use chrono::NaiveDate;
use entity::enums::{AttendanceStatus, LevelStage, Shift};
use registrar::{
    error::Error, model::dto::RecordAttendance, service::attendance::AttendanceService,
};
use registrar_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

struct AttendanceScene {
    student_id: i32,
    classroom_id: i32,
}

/// Inserts the campus, classroom chain and one student.
async fn build_scene(test: &mut TestSetup) -> Result<AttendanceScene, TestError> {
    let campus = test.school().insert_campus("North Campus", "Karachi").await?;
    let level = test
        .school()
        .insert_level(campus.id, LevelStage::Primary, Shift::Morning)
        .await?;
    let grade = test.school().insert_grade(level.id, "Grade-3").await?;
    let classroom = test.school().insert_classroom(grade.id, "A").await?;
    let student = test
        .people()
        .insert_student(campus.id, Some(classroom.id), "Bilal Ahmed", Shift::Morning)
        .await?;

    Ok(AttendanceScene {
        student_id: student.id,
        classroom_id: classroom.id,
    })
}

async fn get_summary(
    test: &TestSetup,
    student_id: i32,
    year: i32,
    month: i32,
) -> Result<Option<entity::attendance_summary::Model>, TestError> {
    Ok(entity::prelude::AttendanceSummary::find()
        .filter(entity::attendance_summary::Column::StudentId.eq(student_id))
        .filter(entity::attendance_summary::Column::Year.eq(year))
        .filter(entity::attendance_summary::Column::Month.eq(month))
        .one(&test.db)
        .await?)
}

/// Tests recording attendance across several days.
///
/// Verifies that each day gets its own row and the monthly summary counts
/// every status bucket.
///
/// Expected: Ok with a summary of two present and one late
#[tokio::test]
async fn records_attendance_and_updates_summary() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;
    let scene = build_scene(&mut test).await?;

    let service = AttendanceService::new(&test.db);
    for (day, status) in [(3, "present"), (4, "present"), (5, "late")] {
        let result = service
            .record_attendance(RecordAttendance {
                student_id: scene.student_id,
                classroom_id: scene.classroom_id,
                date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
                status: status.to_string(),
            })
            .await;
        assert!(result.is_ok());
    }

    let summary = get_summary(&test, scene.student_id, 2026, 3)
        .await?
        .expect("Summary should exist");
    assert_eq!(summary.present_count, 2);
    assert_eq!(summary.late_count, 1);
    assert_eq!(summary.absent_count, 0);
    assert_eq!(summary.leave_count, 0);

    Ok(())
}

/// Tests re-recording the same day.
///
/// Verifies that a second entry for the same student and day overwrites the
/// first instead of adding a row, and that the summary follows.
///
/// Expected: Ok with one attendance row and a summary of one absent
#[tokio::test]
async fn second_entry_for_same_day_overwrites() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;
    let scene = build_scene(&mut test).await?;

    let date = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
    let service = AttendanceService::new(&test.db);

    service
        .record_attendance(RecordAttendance {
            student_id: scene.student_id,
            classroom_id: scene.classroom_id,
            date,
            status: "present".to_string(),
        })
        .await
        .unwrap();
    let result = service
        .record_attendance(RecordAttendance {
            student_id: scene.student_id,
            classroom_id: scene.classroom_id,
            date,
            status: "absent".to_string(),
        })
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().status, AttendanceStatus::Absent);

    // Verify only one row exists for the day
    let rows = entity::prelude::Attendance::find()
        .filter(entity::attendance::Column::StudentId.eq(scene.student_id))
        .filter(entity::attendance::Column::Date.eq(date))
        .all(&test.db)
        .await?;
    assert_eq!(rows.len(), 1);

    let summary = get_summary(&test, scene.student_id, 2026, 3)
        .await?
        .expect("Summary should exist");
    assert_eq!(summary.present_count, 0);
    assert_eq!(summary.absent_count, 1);

    Ok(())
}

/// Tests rejection of an unknown attendance status.
///
/// Expected: Err(ParseError) naming the status
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;
    let scene = build_scene(&mut test).await?;

    let result = AttendanceService::new(&test.db)
        .record_attendance(RecordAttendance {
            student_id: scene.student_id,
            classroom_id: scene.classroom_id,
            date: NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
            status: "vacation".to_string(),
        })
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        Error::ParseError(message) => assert!(message.contains("vacation")),
        _ => panic!("Expected ParseError"),
    }

    Ok(())
}
