//! Table mapping for breaking jobs.

use super::job_repo::{
    count_column, flag_column, flag_to_int, text_column, JobRecord, SqliteJobRepository,
};
use crate::model::breaking_job::BreakingJob;
use crate::model::normalize::RawRecord;
use crate::model::{JobId, JobKind};
use rusqlite::types::Value as SqlValue;
use rusqlite::Row;

/// SQLite repository over the `breaking` table.
pub type SqliteBreakingRepository<'conn> = SqliteJobRepository<'conn, BreakingJob>;

impl JobRecord for BreakingJob {
    const KIND: JobKind = JobKind::Breaking;

    fn from_raw(input: &RawRecord) -> Self {
        BreakingJob::from_raw(input)
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: JobId) {
        self.id = id;
    }

    fn to_sql_values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.id.clone()),
            SqlValue::Text(self.mark.clone()),
            SqlValue::Text(self.order_id.clone()),
            SqlValue::Integer(self.bales),
            SqlValue::Text(self.status.clone()),
            SqlValue::Text(self.breaker.clone()),
            SqlValue::Text(self.hauler.clone()),
            SqlValue::Text(self.date_to_load.clone()),
            SqlValue::Text(self.completed_date.clone()),
            SqlValue::Text(self.location.clone()),
            SqlValue::Integer(flag_to_int(self.ready)),
        ]
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: text_column(row, "id")?,
            mark: text_column(row, "mark")?,
            order_id: text_column(row, "orderId")?,
            bales: count_column(row, "bales")?,
            status: text_column(row, "status")?,
            breaker: text_column(row, "breaker")?,
            hauler: text_column(row, "hauler")?,
            date_to_load: text_column(row, "dateToLoad")?,
            completed_date: text_column(row, "completedDate")?,
            location: text_column(row, "location")?,
            ready: flag_column(row, "ready")?,
        })
    }
}
