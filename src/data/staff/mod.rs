//! Repositories for staff records: teachers, coordinators and principals.
//!
//! All three tables carry an employee code drawn from the same sequence, so each
//! repository exposes the same `employee_code_exists` probe; the code service checks
//! all of them before accepting a freshly generated code.

pub mod coordinator;
pub mod principal;
pub mod teacher;

pub use coordinator::CoordinatorRepository;
pub use principal::PrincipalRepository;
pub use teacher::TeacherRepository;
