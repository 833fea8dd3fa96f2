pub use sea_orm_migration::prelude::*;

mod m20260102_000001_campus;
mod m20260102_000002_user_account;
mod m20260102_000003_teacher;
mod m20260102_000004_coordinator;
mod m20260102_000005_principal;
mod m20260102_000006_level;
mod m20260102_000007_grade;
mod m20260102_000008_classroom;
mod m20260102_000009_student;
mod m20260102_000010_global_counter;
mod m20260102_000011_transfer_request;
mod m20260102_000012_id_history;
mod m20260102_000013_attendance;
mod m20260102_000014_attendance_summary;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260102_000001_campus::Migration),
            Box::new(m20260102_000002_user_account::Migration),
            Box::new(m20260102_000003_teacher::Migration),
            Box::new(m20260102_000004_coordinator::Migration),
            Box::new(m20260102_000005_principal::Migration),
            Box::new(m20260102_000006_level::Migration),
            Box::new(m20260102_000007_grade::Migration),
            Box::new(m20260102_000008_classroom::Migration),
            Box::new(m20260102_000009_student::Migration),
            Box::new(m20260102_000010_global_counter::Migration),
            Box::new(m20260102_000011_transfer_request::Migration),
            Box::new(m20260102_000012_id_history::Migration),
            Box::new(m20260102_000013_attendance::Migration),
            Box::new(m20260102_000014_attendance_summary::Migration),
        ]
    }
}
