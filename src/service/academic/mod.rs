//! Level, grade and classroom management.
//!
//! Each creation operation assigns the entity's code in the same transaction
//! as the insert. A missing parent code is tolerated: the entity is persisted
//! uncoded and picked up by a later assignment pass.

pub mod classroom;
pub mod grade;
pub mod level;

pub use classroom::ClassroomService;
pub use grade::GradeService;
pub use level::LevelService;
