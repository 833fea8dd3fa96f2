//! Tests for CampusService::create_campus method.
//!
//! This module verifies campus creation behavior, including code generation from
//! name and city initials, tolerance of code exhaustion, and name uniqueness.

use registrar::{model::dto::NewCampus, service::campus::CampusService};
use registrar_test_utils::prelude::*;
use sea_orm::EntityTrait;

/// Tests creating a campus with a generated code.
///
/// Verifies that the campus is persisted and receives a code built from the
/// first two name word initials, the city initial, and a two-digit suffix.
///
/// Expected: Ok with a five-character code starting with "TCK"
#[tokio::test]
async fn creates_campus_with_code() -> Result<(), TestError> {
    let test = TestBuilder::new().with_school_tables().build().await?;

    let result = CampusService::new(&test.db)
        .create_campus(NewCampus {
            name: "The City School".to_string(),
            city: "Karachi".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let campus = result.unwrap();

    let code = campus.code.expect("Campus should receive a code");
    assert_eq!(code.len(), 5);
    assert!(code.starts_with("TCK"));
    assert!(code[3..].chars().all(|c| c.is_ascii_digit()));

    // Verify the code was persisted
    let db_campus = entity::prelude::Campus::find_by_id(campus.id)
        .one(&test.db)
        .await?
        .expect("Campus should exist");
    assert_eq!(db_campus.code, Some(code));

    Ok(())
}

/// Tests campus creation when every candidate code is taken.
///
/// Verifies that once all one hundred suffixes for the campus's initials are
/// occupied, the campus is still created, just without a code.
///
/// Expected: Ok with the campus persisted and `code` left empty
#[tokio::test]
async fn campus_survives_code_exhaustion() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_school_tables().build().await?;

    // Occupy all one hundred TCK codes
    for suffix in 0..100 {
        test.school()
            .insert_campus_with_code(
                &format!("Filler {suffix:02}"),
                "Karachi",
                &format!("TCK{suffix:02}"),
            )
            .await?;
    }

    let result = CampusService::new(&test.db)
        .create_campus(NewCampus {
            name: "Tall Cedar".to_string(),
            city: "Karachi".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let campus = result.unwrap();
    assert!(campus.code.is_none());

    // Verify the campus still exists without a code
    let db_campus = entity::prelude::Campus::find_by_id(campus.id)
        .one(&test.db)
        .await?
        .expect("Campus should exist");
    assert!(db_campus.code.is_none());

    Ok(())
}

/// Tests creating a campus with an already-used name.
///
/// Verifies that campus names are unique and a duplicate insert is rejected.
///
/// Expected: Err from the unique name constraint
#[tokio::test]
async fn creating_campus_with_taken_name_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_school_tables()
        .with_campus("North Campus", "Karachi")
        .build()
        .await?;

    let result = CampusService::new(&test.db)
        .create_campus(NewCampus {
            name: "North Campus".to_string(),
            city: "Lahore".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
