pub mod prelude;

pub mod attendance;
pub mod attendance_summary;
pub mod campus;
pub mod classroom;
pub mod coordinator;
pub mod enums;
pub mod global_counter;
pub mod grade;
pub mod id_history;
pub mod level;
pub mod principal;
pub mod student;
pub mod teacher;
pub mod transfer_request;
pub mod user_account;
