//! Test fixture modules for database record creation.
//!
//! This module contains fixture utilities for creating test data during test
//! execution (Phase 2 of the test architecture). Each submodule provides
//! specialized fixtures for different aspects of the system:
//!
//! - `school` - Organizational records (campuses, levels, grades, classrooms, counters)
//! - `people` - Person records (user accounts, staff, students)

pub mod people;
pub mod school;
