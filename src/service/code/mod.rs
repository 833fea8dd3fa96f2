//! Registration code generation and assignment.
//!
//! Person codes (employees and students) embed a sequence number drawn from the
//! shared counter table; organizational codes (campus, level, grade, classroom)
//! are derived from their parent's code. Every code field is write-once: once a
//! row carries a code, assignment returns it unchanged and the transfer service
//! is the only other writer.

pub mod format;
pub mod parse;

use chrono::{Datelike, Utc};
use entity::enums::{Shift, StaffRole};
use sea_orm::{DatabaseTransaction, DbErr};

use crate::data::counter::CounterRepository;
use crate::data::school::{
    CampusRepository, ClassroomRepository, GradeRepository, LevelRepository,
};
use crate::data::staff::{CoordinatorRepository, PrincipalRepository, TeacherRepository};
use crate::data::student::StudentRepository;
use crate::error::code::CodeError;
use crate::error::Error;

use self::format::{
    format_campus_code, format_classroom_code, format_employee_code, format_grade_code,
    format_level_code, format_student_code,
};

/// Counter key for student sequence numbers.
pub const STUDENT_COUNTER_KEY: &str = "student";
/// Counter key for employee sequence numbers, shared by teachers, coordinators
/// and principals.
pub const EMPLOYEE_COUNTER_KEY: &str = "employee";

/// Sequence draws per person code before giving up.
const MAX_SEQUENCE_ATTEMPTS: u32 = 20;
/// Random suffix draws per campus code before giving up.
const MAX_CAMPUS_CODE_ATTEMPTS: u32 = 5;

/// Counts of person codes assigned by [`CodeService::backfill_missing_codes`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BackfillReport {
    /// Teachers that received an employee code.
    pub teachers: usize,
    /// Coordinators that received an employee code.
    pub coordinators: usize,
    /// Principals that received an employee code.
    pub principals: usize,
    /// Students that received a student code.
    pub students: usize,
}

/// Generates and assigns registration codes.
///
/// Sequence numbers must be minted inside the transaction that holds the
/// counter row lock, so the service borrows a [`DatabaseTransaction`] rather
/// than a plain connection. Callers begin the transaction, run the assignment
/// alongside their own writes, and commit.
pub struct CodeService<'a> {
    db: &'a DatabaseTransaction,
}

impl<'a> CodeService<'a> {
    /// Creates a new instance of [`CodeService`]
    pub fn new(db: &'a DatabaseTransaction) -> Self {
        Self { db }
    }

    /// Generates a fresh employee code such as `C06-M-25-T-0007`.
    ///
    /// Each attempt consumes a sequence number; on a clash with a code written
    /// outside the allocator the counter simply advances, it never reuses a
    /// value.
    pub async fn generate_employee_code(
        &self,
        campus_id: i32,
        shift: Shift,
        role: StaffRole,
    ) -> Result<String, Error> {
        let counters = CounterRepository::new(self.db);
        let year = Utc::now().year();

        for attempt in 1..=MAX_SEQUENCE_ATTEMPTS {
            let sequence = counters.next(EMPLOYEE_COUNTER_KEY).await?;
            let code = format_employee_code(campus_id, shift, year, role, sequence);

            if self.employee_code_in_use(&code).await? {
                tracing::warn!(
                    "Employee code {} is already taken, advancing the sequence (attempt {}/{})",
                    code,
                    attempt,
                    MAX_SEQUENCE_ATTEMPTS
                );
                continue;
            }

            return Ok(code);
        }

        Err(CodeError::SequenceCollision {
            key: EMPLOYEE_COUNTER_KEY.to_string(),
            attempts: MAX_SEQUENCE_ATTEMPTS,
        }
        .into())
    }

    /// Generates a fresh student code such as `C06M25-0042`.
    pub async fn generate_student_code(
        &self,
        campus_id: i32,
        shift: Shift,
    ) -> Result<String, Error> {
        let counters = CounterRepository::new(self.db);
        let students = StudentRepository::new(self.db);
        let year = Utc::now().year();

        for attempt in 1..=MAX_SEQUENCE_ATTEMPTS {
            let sequence = counters.next(STUDENT_COUNTER_KEY).await?;
            let code = format_student_code(campus_id, shift, year, sequence);

            if students.student_code_exists(&code).await? {
                tracing::warn!(
                    "Student code {} is already taken, advancing the sequence (attempt {}/{})",
                    code,
                    attempt,
                    MAX_SEQUENCE_ATTEMPTS
                );
                continue;
            }

            return Ok(code);
        }

        Err(CodeError::SequenceCollision {
            key: STUDENT_COUNTER_KEY.to_string(),
            attempts: MAX_SEQUENCE_ATTEMPTS,
        }
        .into())
    }

    /// Assigns a stored campus code, drawing random suffixes until one is free.
    pub async fn assign_campus_code(&self, campus_id: i32) -> Result<String, Error> {
        let campuses = CampusRepository::new(self.db);

        let campus = campuses
            .get(campus_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Campus {campus_id} not found")))?;

        if let Some(code) = campus.code {
            return Ok(code);
        }

        use rand::Rng;

        for attempt in 1..=MAX_CAMPUS_CODE_ATTEMPTS {
            let suffix: u8 = rand::rng().random_range(0..100);
            let code = format_campus_code(&campus.name, &campus.city, suffix);

            if campuses.code_exists(&code).await? {
                tracing::warn!(
                    "Campus code {} is already taken, drawing a new suffix (attempt {}/{})",
                    code,
                    attempt,
                    MAX_CAMPUS_CODE_ATTEMPTS
                );
                continue;
            }

            campuses.set_code(campus_id, &code).await?;

            return Ok(code);
        }

        Err(CodeError::CampusCodeExhausted {
            campus_id,
            attempts: MAX_CAMPUS_CODE_ATTEMPTS,
        }
        .into())
    }

    /// Assigns a level code derived from the campus code, e.g. `TCK07-L2-M`.
    ///
    /// Returns `Ok(None)` when the campus has no code yet; the level stays
    /// uncoded until a later assignment pass finds the prerequisite in place.
    pub async fn assign_level_code(&self, level_id: i32) -> Result<Option<String>, Error> {
        let levels = LevelRepository::new(self.db);

        let level = levels
            .get(level_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Level {level_id} not found")))?;

        if level.code.is_some() {
            return Ok(level.code);
        }

        let campus = CampusRepository::new(self.db)
            .get(level.campus_id)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Campus {} not found", level.campus_id))
            })?;

        let Some(campus_code) = campus.code else {
            tracing::warn!(
                "Campus {} has no code yet, leaving level {} uncoded",
                level.campus_id,
                level_id
            );
            return Ok(None);
        };

        let code = format_level_code(&campus_code, level.stage, level.shift);
        levels.set_code(level_id, &code).await?;

        Ok(Some(code))
    }

    /// Assigns a grade code derived from the level code, e.g. `TCK07-L2-M-G03`.
    ///
    /// Returns `Ok(None)` when the level has no code yet.
    pub async fn assign_grade_code(&self, grade_id: i32) -> Result<Option<String>, Error> {
        let grades = GradeRepository::new(self.db);

        let grade = grades
            .get(grade_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Grade {grade_id} not found")))?;

        if grade.code.is_some() {
            return Ok(grade.code);
        }

        let level = LevelRepository::new(self.db)
            .get(grade.level_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Level {} not found", grade.level_id)))?;

        let Some(level_code) = level.code else {
            tracing::warn!(
                "Level {} has no code yet, leaving grade {} uncoded",
                grade.level_id,
                grade_id
            );
            return Ok(None);
        };

        let code = format_grade_code(&level_code, &grade.name);
        grades.set_code(grade_id, &code).await?;

        Ok(Some(code))
    }

    /// Assigns a classroom code derived from the grade code, e.g.
    /// `TCK07-L2-M-G03-A`.
    ///
    /// Returns `Ok(None)` when the grade has no code yet.
    pub async fn assign_classroom_code(&self, classroom_id: i32) -> Result<Option<String>, Error> {
        let classrooms = ClassroomRepository::new(self.db);

        let classroom = classrooms
            .get(classroom_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Classroom {classroom_id} not found")))?;

        if classroom.code.is_some() {
            return Ok(classroom.code);
        }

        let grade = GradeRepository::new(self.db)
            .get(classroom.grade_id)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Grade {} not found", classroom.grade_id))
            })?;

        let Some(grade_code) = grade.code else {
            tracing::warn!(
                "Grade {} has no code yet, leaving classroom {} uncoded",
                classroom.grade_id,
                classroom_id
            );
            return Ok(None);
        };

        let code = format_classroom_code(&grade_code, &classroom.section);
        classrooms.set_code(classroom_id, &code).await?;

        Ok(Some(code))
    }

    /// Assigns an employee code to a teacher, or returns the existing one.
    pub async fn assign_teacher_code(&self, teacher_id: i32) -> Result<String, Error> {
        let teachers = TeacherRepository::new(self.db);

        let teacher = teachers
            .get(teacher_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Teacher {teacher_id} not found")))?;

        if let Some(code) = teacher.employee_code {
            return Ok(code);
        }

        let code = self
            .generate_employee_code(teacher.campus_id, teacher.shift, StaffRole::Teacher)
            .await?;
        teachers.set_employee_code(teacher_id, &code).await?;

        Ok(code)
    }

    /// Assigns an employee code to a coordinator, or returns the existing one.
    pub async fn assign_coordinator_code(&self, coordinator_id: i32) -> Result<String, Error> {
        let coordinators = CoordinatorRepository::new(self.db);

        let coordinator = coordinators.get(coordinator_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Coordinator {coordinator_id} not found"))
        })?;

        if let Some(code) = coordinator.employee_code {
            return Ok(code);
        }

        let code = self
            .generate_employee_code(
                coordinator.campus_id,
                coordinator.shift,
                StaffRole::Coordinator,
            )
            .await?;
        coordinators.set_employee_code(coordinator_id, &code).await?;

        Ok(code)
    }

    /// Assigns an employee code to a principal, or returns the existing one.
    pub async fn assign_principal_code(&self, principal_id: i32) -> Result<String, Error> {
        let principals = PrincipalRepository::new(self.db);

        let principal = principals
            .get(principal_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Principal {principal_id} not found")))?;

        if let Some(code) = principal.employee_code {
            return Ok(code);
        }

        let code = self
            .generate_employee_code(principal.campus_id, principal.shift, StaffRole::Principal)
            .await?;
        principals.set_employee_code(principal_id, &code).await?;

        Ok(code)
    }

    /// Assigns a student code, or returns the existing one.
    pub async fn assign_student_code(&self, student_id: i32) -> Result<String, Error> {
        let students = StudentRepository::new(self.db);

        let student = students
            .get(student_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Student {student_id} not found")))?;

        if let Some(code) = student.student_code {
            return Ok(code);
        }

        let code = self
            .generate_student_code(student.campus_id, student.shift)
            .await?;
        students.set_student_code(student_id, &code).await?;

        Ok(code)
    }

    /// Assigns codes to every person row that is missing one.
    ///
    /// Covers rows imported or created before code assignment ran for them.
    /// Organizational codes follow their own prerequisite chain and are not
    /// touched here.
    pub async fn backfill_missing_codes(&self) -> Result<BackfillReport, Error> {
        let mut report = BackfillReport::default();

        for teacher in TeacherRepository::new(self.db).get_many_missing_code().await? {
            self.assign_teacher_code(teacher.id).await?;
            report.teachers += 1;
        }

        for coordinator in CoordinatorRepository::new(self.db)
            .get_many_missing_code()
            .await?
        {
            self.assign_coordinator_code(coordinator.id).await?;
            report.coordinators += 1;
        }

        for principal in PrincipalRepository::new(self.db)
            .get_many_missing_code()
            .await?
        {
            self.assign_principal_code(principal.id).await?;
            report.principals += 1;
        }

        for student in StudentRepository::new(self.db).get_many_missing_code().await? {
            self.assign_student_code(student.id).await?;
            report.students += 1;
        }

        Ok(report)
    }

    async fn employee_code_in_use(&self, code: &str) -> Result<bool, DbErr> {
        if TeacherRepository::new(self.db)
            .employee_code_exists(code)
            .await?
        {
            return Ok(true);
        }

        if CoordinatorRepository::new(self.db)
            .employee_code_exists(code)
            .await?
        {
            return Ok(true);
        }

        PrincipalRepository::new(self.db)
            .employee_code_exists(code)
            .await
    }
}
