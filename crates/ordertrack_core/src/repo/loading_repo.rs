//! Table mapping for loading jobs.

use super::job_repo::{text_column, JobRecord, SqliteJobRepository};
use crate::model::loading_job::LoadingJob;
use crate::model::normalize::RawRecord;
use crate::model::{JobId, JobKind};
use rusqlite::types::Value as SqlValue;
use rusqlite::Row;

/// SQLite repository over the `loading` table.
pub type SqliteLoadingRepository<'conn> = SqliteJobRepository<'conn, LoadingJob>;

impl JobRecord for LoadingJob {
    const KIND: JobKind = JobKind::Loading;

    fn from_raw(input: &RawRecord) -> Self {
        LoadingJob::from_raw(input)
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: JobId) {
        self.id = id;
    }

    fn to_sql_values(&self) -> Vec<SqlValue> {
        [
            &self.id,
            &self.mark,
            &self.order_id,
            &self.date_to_load,
            &self.location,
            &self.clear_date,
            &self.date_loaded,
            &self.status,
            &self.loaded_by,
            &self.kind,
            &self.vehicle_id,
            &self.driver_name,
            &self.phone,
        ]
        .into_iter()
        .map(|value| SqlValue::Text(value.clone()))
        .collect()
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: text_column(row, "id")?,
            mark: text_column(row, "mark")?,
            order_id: text_column(row, "orderId")?,
            date_to_load: text_column(row, "dateToLoad")?,
            location: text_column(row, "location")?,
            clear_date: text_column(row, "clearDate")?,
            date_loaded: text_column(row, "dateLoaded")?,
            status: text_column(row, "status")?,
            loaded_by: text_column(row, "loadedBy")?,
            kind: text_column(row, "type")?,
            vehicle_id: text_column(row, "vehicleId")?,
            driver_name: text_column(row, "driverName")?,
            phone: text_column(row, "phone")?,
        })
    }
}
