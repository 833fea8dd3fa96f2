//! Daily attendance and monthly summaries.
//!
//! Summaries are derived data: every write to a daily row recomputes the
//! affected month from scratch in the same transaction, so a summary never
//! drifts from the rows it covers.

use chrono::{Datelike, NaiveDate};
use entity::enums::AttendanceStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::data::attendance::{AttendanceRepository, AttendanceSummaryRepository, MonthlyCounts};
use crate::error::Error;
use crate::model::db::{AttendanceModel, AttendanceSummaryModel};
use crate::model::dto::RecordAttendance;

/// Records attendance and maintains the monthly summaries.
pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    /// Creates a new instance of [`AttendanceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one day of attendance and refreshes that month's summary in one
    /// transaction.
    ///
    /// Recording the same student and day again overwrites the earlier status.
    pub async fn record_attendance(
        &self,
        record: RecordAttendance,
    ) -> Result<AttendanceModel, Error> {
        let status = AttendanceStatus::from_input(&record.status).ok_or_else(|| {
            Error::ParseError(format!("Unknown attendance status: {}", record.status))
        })?;

        let txn = self.db.begin().await?;

        let attendance = AttendanceRepository::new(&txn)
            .record(record.student_id, record.classroom_id, record.date, status)
            .await?;

        recompute_summary(
            &txn,
            record.student_id,
            record.date.year(),
            record.date.month(),
        )
        .await?;

        txn.commit().await?;

        Ok(attendance)
    }

    /// Recomputes a student's summary for one month from the daily rows.
    ///
    /// Useful after bulk imports that bypass [`Self::record_attendance`].
    pub async fn recompute_monthly_summary(
        &self,
        student_id: i32,
        year: i32,
        month: u32,
    ) -> Result<AttendanceSummaryModel, Error> {
        let txn = self.db.begin().await?;

        let summary = recompute_summary(&txn, student_id, year, month).await?;

        txn.commit().await?;

        Ok(summary)
    }
}

async fn recompute_summary<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    year: i32,
    month: u32,
) -> Result<AttendanceSummaryModel, Error> {
    let (start, end) = month_bounds(year, month)?;

    let rows = AttendanceRepository::new(db)
        .get_many_in_range(student_id, start, end)
        .await?;

    let mut counts = MonthlyCounts::default();
    for row in &rows {
        match row.status {
            AttendanceStatus::Present => counts.present += 1,
            AttendanceStatus::Absent => counts.absent += 1,
            AttendanceStatus::Leave => counts.leave += 1,
            AttendanceStatus::Late => counts.late += 1,
        }
    }

    let summary = AttendanceSummaryRepository::new(db)
        .upsert(student_id, year, month as i32, counts)
        .await?;

    Ok(summary)
}

/// First days of the given month and of the following month.
fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), Error> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::ParseError(format!("Invalid month: {year}-{month}")))?;
    let end = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
    }
    .ok_or_else(|| Error::ParseError(format!("Invalid month: {year}-{month}")))?;

    Ok((start, end))
}
