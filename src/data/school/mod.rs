//! Repositories for the campus structure: campuses, levels, grades and classrooms.

pub mod campus;
pub mod classroom;
pub mod grade;
pub mod level;

pub use campus::CampusRepository;
pub use classroom::ClassroomRepository;
pub use grade::GradeRepository;
pub use level::LevelRepository;
