//! Database model type aliases for test utilities.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the test utilities. These aliases match those in the main registrar crate
//! to ensure consistency across tests.

/// Type alias for campus database model.
pub type CampusModel = entity::campus::Model;

/// Type alias for level database model.
pub type LevelModel = entity::level::Model;

/// Type alias for grade database model.
pub type GradeModel = entity::grade::Model;

/// Type alias for classroom database model.
pub type ClassroomModel = entity::classroom::Model;

/// Type alias for user account database model.
pub type UserAccountModel = entity::user_account::Model;

/// Type alias for teacher database model.
pub type TeacherModel = entity::teacher::Model;

/// Type alias for coordinator database model.
pub type CoordinatorModel = entity::coordinator::Model;

/// Type alias for principal database model.
pub type PrincipalModel = entity::principal::Model;

/// Type alias for student database model.
pub type StudentModel = entity::student::Model;

/// Type alias for global counter database model.
pub type GlobalCounterModel = entity::global_counter::Model;
