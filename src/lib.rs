//! Registrar application core modules.
//!
//! This crate contains the backend for a multi-campus school administration system:
//! campus/level/grade/classroom management, staff and student onboarding, registration
//! code assignment backed by a database-wide counter, campus transfer workflows with
//! identifier rewrites, and attendance bookkeeping. Persistence is handled through
//! SeaORM on top of PostgreSQL, with schema management in the `migration` crate.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
