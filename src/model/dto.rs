//! Input payloads accepted by the service layer.
//!
//! Enum-like fields (shift, stage, attendance status) arrive as strings and are
//! normalized by the services, so legacy spellings like "both" for a shift are
//! handled in one place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payload for creating a campus.
#[derive(Clone, Serialize, Deserialize)]
pub struct NewCampus {
    /// Campus display name, unique across the system.
    pub name: String,
    /// City the campus operates in.
    pub city: String,
}

/// Payload for creating a level within a campus.
#[derive(Clone, Serialize, Deserialize)]
pub struct NewLevel {
    /// Campus the level belongs to.
    pub campus_id: i32,
    /// Stage name: "pre-primary", "primary" or "secondary".
    pub stage: String,
    /// Shift the level runs in.
    pub shift: String,
}

/// Payload for creating a grade within a level.
#[derive(Clone, Serialize, Deserialize)]
pub struct NewGrade {
    /// Level the grade belongs to.
    pub level_id: i32,
    /// Grade name, e.g. "Nursery" or "Grade-7".
    pub name: String,
}

/// Payload for creating a classroom section within a grade.
#[derive(Clone, Serialize, Deserialize)]
pub struct NewClassroom {
    /// Grade the classroom belongs to.
    pub grade_id: i32,
    /// Section label, e.g. "A".
    pub section: String,
}

/// Payload for onboarding a staff member (teacher, coordinator or principal).
#[derive(Clone, Serialize, Deserialize)]
pub struct NewStaffMember {
    /// Campus the staff member is posted at.
    pub campus_id: i32,
    /// Display name.
    pub name: String,
    /// Login email; an existing account with this email is reused.
    pub email: String,
    /// Shift the staff member works.
    pub shift: String,
}

/// Payload for enrolling a student.
#[derive(Clone, Serialize, Deserialize)]
pub struct NewStudent {
    /// Campus the student enrolls at.
    pub campus_id: i32,
    /// Classroom to place the student in, if already decided.
    pub classroom_id: Option<i32>,
    /// Student display name.
    pub name: String,
    /// Guardian's name.
    pub guardian_name: String,
    /// Login email for an optional student account.
    pub email: Option<String>,
    /// Shift the student attends.
    pub shift: String,
}

/// Payload for opening a transfer request.
#[derive(Clone, Serialize, Deserialize)]
pub struct NewTransferRequest {
    /// Destination campus.
    pub to_campus_id: i32,
    /// Destination shift.
    pub to_shift: String,
    /// Requester's justification.
    pub reason: String,
    /// Account opening the request.
    pub requested_by: i32,
}

/// Payload for recording one student's attendance on one day.
#[derive(Clone, Serialize, Deserialize)]
pub struct RecordAttendance {
    /// Student the attendance is for.
    pub student_id: i32,
    /// Classroom the attendance was taken in.
    pub classroom_id: i32,
    /// Calendar day being recorded.
    pub date: NaiveDate,
    /// Attendance status: "present", "absent", "leave" or "late".
    pub status: String,
}
