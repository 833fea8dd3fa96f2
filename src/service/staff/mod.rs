//! Staff onboarding.
//!
//! Each onboarding operation runs in one transaction: the login account is
//! created (or reused by email), the staff row is inserted, and the employee
//! code is generated from the shared sequence. The whole transaction is
//! retried on transient database errors.

pub mod coordinator;
pub mod principal;
pub mod teacher;

pub use coordinator::CoordinatorService;
pub use principal::PrincipalService;
pub use teacher::TeacherService;
