//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application. These aliases simplify type signatures and provide a single
//! point of reference for database model types, making it easier to work with entities
//! without importing from the generated `entity` crate directly.

/// Type alias for the campus database model.
///
/// Represents a physical school campus. Each campus owns levels, staff and students, and
/// carries a short human-facing code derived from its name and city.
///
/// # Fields (from `entity::campus::Model`)
/// - `id` - Primary key, unique campus identifier
/// - `name` - Campus display name (unique)
/// - `city` - City the campus operates in
/// - `code` - Assigned campus code, set once after creation (nullable until assigned)
/// - `created_at` - Timestamp when the campus was created
/// - `updated_at` - Timestamp of the last campus record update
pub type CampusModel = entity::campus::Model;

/// Type alias for the user account database model.
///
/// Represents a login identity shared by staff and students. Role-specific records
/// (teacher, coordinator, principal, student) link back to an account via foreign key.
///
/// # Fields (from `entity::user_account::Model`)
/// - `id` - Primary key, unique account identifier
/// - `email` - Login email address (unique)
/// - `name` - Display name
/// - `role` - Account role (admin, principal, coordinator, teacher, student)
/// - `is_active` - Whether the account may log in
/// - `created_at` - Timestamp when the account was created
/// - `updated_at` - Timestamp of the last account record update
pub type UserAccountModel = entity::user_account::Model;

/// Type alias for the teacher database model.
///
/// Represents a teacher posted at a campus for a given shift. The employee code is
/// assigned once at onboarding and only changes through an approved transfer.
///
/// # Fields (from `entity::teacher::Model`)
/// - `id` - Primary key, unique teacher identifier
/// - `campus_id` - Foreign key to the campus the teacher works at
/// - `user_account_id` - Foreign key to the teacher's login account (unique)
/// - `name` - Teacher display name
/// - `shift` - Shift the teacher works (morning, afternoon, evening)
/// - `employee_code` - Assigned employee code (nullable until assigned, unique)
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last record update
pub type TeacherModel = entity::teacher::Model;

/// Type alias for the coordinator database model.
///
/// Coordinators supervise the levels of a campus; shape matches [`TeacherModel`].
pub type CoordinatorModel = entity::coordinator::Model;

/// Type alias for the principal database model.
///
/// Each campus has at most one principal; the principal reviews inbound transfer requests.
pub type PrincipalModel = entity::principal::Model;

/// Type alias for the level database model.
///
/// A stage (pre-primary, primary, secondary) offered by a campus during one shift.
pub type LevelModel = entity::level::Model;

/// Type alias for the grade database model.
///
/// A named grade within a level, e.g. "Nursery" or "Grade-7".
pub type GradeModel = entity::grade::Model;

/// Type alias for the classroom database model.
///
/// A section of a grade, optionally led by a class teacher.
pub type ClassroomModel = entity::classroom::Model;

/// Type alias for the student database model.
///
/// Represents an enrolled student. The student code is assigned once at enrollment and
/// only changes through an approved transfer.
///
/// # Fields (from `entity::student::Model`)
/// - `id` - Primary key, unique student identifier
/// - `campus_id` - Foreign key to the campus the student attends
/// - `classroom_id` - Foreign key to the assigned classroom (nullable)
/// - `user_account_id` - Foreign key to the student's login account (nullable)
/// - `name` - Student display name
/// - `guardian_name` - Name of the student's guardian
/// - `shift` - Shift the student attends
/// - `student_code` - Assigned student code (nullable until assigned, unique)
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last record update
pub type StudentModel = entity::student::Model;

/// Type alias for the global counter database model.
///
/// One row per counter key; the value only moves forward.
pub type GlobalCounterModel = entity::global_counter::Model;

/// Type alias for the transfer request database model.
///
/// Records a requested move of a student or teacher between campuses or shifts.
///
/// # Fields (from `entity::transfer_request::Model`)
/// - `id` - Primary key, unique request identifier
/// - `subject_type` - Whether the request moves a student or a teacher
/// - `student_id` / `teacher_id` - Exactly one is set, matching `subject_type`
/// - `from_campus_id` / `to_campus_id` - Source and destination campuses
/// - `from_shift` / `to_shift` - Source and destination shifts
/// - `reason` - Requester's justification
/// - `status` - Workflow status (draft, pending, approved, declined, cancelled)
/// - `requested_by` - Account that opened the request
/// - `decided_by` - Account that approved or declined it (nullable)
/// - `decided_at` - Review timestamp (nullable)
/// - `decision_note` - Reviewer note, defaulted on decline (nullable)
/// - `created_at` - Timestamp when the request was created
/// - `updated_at` - Timestamp of the last request update
pub type TransferRequestModel = entity::transfer_request::Model;

/// Type alias for the identifier history database model.
///
/// The audit record written when an approved transfer rewrites a registration code.
/// Exactly one row exists per approved transfer request.
///
/// # Fields (from `entity::id_history::Model`)
/// - `id` - Primary key, unique history identifier
/// - `transfer_request_id` - Foreign key to the approved request (unique)
/// - `student_id` / `teacher_id` - The rewritten subject, matching the request
/// - `old_code` / `new_code` - Full codes before and after the rewrite
/// - `old_campus_code` / `new_campus_code` - Campus segments before and after
/// - `old_shift_code` / `new_shift_code` - Shift letters before and after
/// - `old_year_code` / `new_year_code` - Two-digit year segments before and after
/// - `old_role_code` / `new_role_code` - Role letters (employees only, nullable)
/// - `suffix` - Sequence digits carried over verbatim
/// - `created_at` - Timestamp when the rewrite happened
pub type IdHistoryModel = entity::id_history::Model;

/// Type alias for the attendance database model.
///
/// One row per student per calendar day.
pub type AttendanceModel = entity::attendance::Model;

/// Type alias for the attendance summary database model.
///
/// Per-student monthly counts, recomputed from daily rows whenever one changes.
pub type AttendanceSummaryModel = entity::attendance_summary::Model;
