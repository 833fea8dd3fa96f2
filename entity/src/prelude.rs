pub use super::attendance::Entity as Attendance;
pub use super::attendance_summary::Entity as AttendanceSummary;
pub use super::campus::Entity as Campus;
pub use super::classroom::Entity as Classroom;
pub use super::coordinator::Entity as Coordinator;
pub use super::global_counter::Entity as GlobalCounter;
pub use super::grade::Entity as Grade;
pub use super::id_history::Entity as IdHistory;
pub use super::level::Entity as Level;
pub use super::principal::Entity as Principal;
pub use super::student::Entity as Student;
pub use super::teacher::Entity as Teacher;
pub use super::transfer_request::Entity as TransferRequest;
pub use super::user_account::Entity as UserAccount;
