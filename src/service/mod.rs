//! Business logic services.
//!
//! Services own the workflows: they parse and validate input, open transactions,
//! call into the repositories and decide which registration codes get written.
//! Each service borrows a database connection and is cheap to construct per call.

pub mod academic;
pub mod attendance;
pub mod campus;
pub mod code;
pub mod retry;
pub mod staff;
pub mod student;
pub mod transfer;
