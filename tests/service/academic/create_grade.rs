//! Tests for GradeService::create_grade method.
//!
//! This module verifies grade creation behavior, including the abbreviated
//! grade segment appended to the level code and tolerance of uncoded parents.

use entity::enums::{LevelStage, Shift};
use registrar::{
    model::dto::{NewGrade, NewLevel},
    service::academic::{GradeService, LevelService},
};
use registrar_test_utils::prelude::*;

/// Tests creating a grade under a coded level.
///
/// Verifies that a recognized grade name is abbreviated and appended to the
/// level code.
///
/// Expected: Ok with code "NCK01-L2-M-G03"
#[tokio::test]
async fn creates_grade_with_abbreviated_code() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    let campus = test
        .school()
        .insert_campus_with_code("North Campus", "Karachi", "NCK01")
        .await?;
    let level = LevelService::new(&test.db)
        .create_level(NewLevel {
            campus_id: campus.id,
            stage: "primary".to_string(),
            shift: "morning".to_string(),
        })
        .await
        .unwrap();

    let result = GradeService::new(&test.db)
        .create_grade(NewGrade {
            level_id: level.id,
            name: "Grade-3".to_string(),
        })
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().code, Some("NCK01-L2-M-G03".to_string()));

    Ok(())
}

/// Tests the fallback abbreviation for unrecognized grade names.
///
/// Verifies that a name outside the known playgroup-to-grade-12 set falls
/// back to its first three letters, uppercased.
///
/// Expected: Ok with a code ending in "-MON"
#[tokio::test]
async fn unknown_grade_name_uses_prefix_abbreviation() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    let campus = test
        .school()
        .insert_campus_with_code("North Campus", "Karachi", "NCK01")
        .await?;
    let level = LevelService::new(&test.db)
        .create_level(NewLevel {
            campus_id: campus.id,
            stage: "pre-primary".to_string(),
            shift: "morning".to_string(),
        })
        .await
        .unwrap();

    let result = GradeService::new(&test.db)
        .create_grade(NewGrade {
            level_id: level.id,
            name: "Montessori".to_string(),
        })
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().code, Some("NCK01-L1-M-MON".to_string()));

    Ok(())
}

/// Tests creating a grade under a level that has no code.
///
/// Expected: Ok with the grade persisted and `code` left empty
#[tokio::test]
async fn grade_under_uncoded_level_is_left_uncoded() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    let campus = test.school().insert_campus("North Campus", "Karachi").await?;
    let level = test
        .school()
        .insert_level(campus.id, LevelStage::Primary, Shift::Morning)
        .await?;

    let result = GradeService::new(&test.db)
        .create_grade(NewGrade {
            level_id: level.id,
            name: "Grade-3".to_string(),
        })
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().code.is_none());

    Ok(())
}
