use chrono::{NaiveDate, Utc};
use entity::enums::AttendanceStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Per-status counts for one student over one calendar month.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MonthlyCounts {
    /// Days marked present.
    pub present: i32,
    /// Days marked absent.
    pub absent: i32,
    /// Days marked on leave.
    pub leave: i32,
    /// Days marked late.
    pub late: i32,
}

/// Queries for the attendance table.
pub struct AttendanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceRepository<'a, C> {
    /// Creates a new instance of [`AttendanceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a student's attendance for one day
    ///
    /// One row exists per student per day; recording the same day again overwrites
    /// the earlier status instead of inserting a duplicate.
    pub async fn record(
        &self,
        student_id: i32,
        classroom_id: i32,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<entity::attendance::Model, DbErr> {
        let existing = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::StudentId.eq(student_id))
            .filter(entity::attendance::Column::Date.eq(date))
            .one(self.db)
            .await?;

        match existing {
            Some(attendance) => {
                let mut attendance_am = attendance.into_active_model();
                attendance_am.classroom_id = ActiveValue::Set(classroom_id);
                attendance_am.status = ActiveValue::Set(status);
                attendance_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

                attendance_am.update(self.db).await
            }
            None => {
                let attendance = entity::attendance::ActiveModel {
                    student_id: ActiveValue::Set(student_id),
                    classroom_id: ActiveValue::Set(classroom_id),
                    date: ActiveValue::Set(date),
                    status: ActiveValue::Set(status),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                };

                attendance.insert(self.db).await
            }
        }
    }

    /// Gets a student's attendance rows within `[start, end_exclusive)`
    pub async fn get_many_in_range(
        &self,
        student_id: i32,
        start: NaiveDate,
        end_exclusive: NaiveDate,
    ) -> Result<Vec<entity::attendance::Model>, DbErr> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::StudentId.eq(student_id))
            .filter(entity::attendance::Column::Date.gte(start))
            .filter(entity::attendance::Column::Date.lt(end_exclusive))
            .all(self.db)
            .await
    }
}

/// Queries for the attendance summary table.
pub struct AttendanceSummaryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceSummaryRepository<'a, C> {
    /// Creates a new instance of [`AttendanceSummaryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the stored summary for a student's month, if any
    pub async fn get(
        &self,
        student_id: i32,
        year: i32,
        month: i32,
    ) -> Result<Option<entity::attendance_summary::Model>, DbErr> {
        entity::prelude::AttendanceSummary::find()
            .filter(entity::attendance_summary::Column::StudentId.eq(student_id))
            .filter(entity::attendance_summary::Column::Year.eq(year))
            .filter(entity::attendance_summary::Column::Month.eq(month))
            .one(self.db)
            .await
    }

    /// Writes the counts for a student's month, replacing any stored summary
    pub async fn upsert(
        &self,
        student_id: i32,
        year: i32,
        month: i32,
        counts: MonthlyCounts,
    ) -> Result<entity::attendance_summary::Model, DbErr> {
        match self.get(student_id, year, month).await? {
            Some(summary) => {
                let mut summary_am = summary.into_active_model();
                summary_am.present_count = ActiveValue::Set(counts.present);
                summary_am.absent_count = ActiveValue::Set(counts.absent);
                summary_am.leave_count = ActiveValue::Set(counts.leave);
                summary_am.late_count = ActiveValue::Set(counts.late);
                summary_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

                summary_am.update(self.db).await
            }
            None => {
                let summary = entity::attendance_summary::ActiveModel {
                    student_id: ActiveValue::Set(student_id),
                    year: ActiveValue::Set(year),
                    month: ActiveValue::Set(month),
                    present_count: ActiveValue::Set(counts.present),
                    absent_count: ActiveValue::Set(counts.absent),
                    leave_count: ActiveValue::Set(counts.leave),
                    late_count: ActiveValue::Set(counts.late),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                };

                summary.insert(self.db).await
            }
        }
    }
}
