//! Generic job repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map a record kind onto its table through [`JobRecord`].
//! - Assign identifiers to records inserted without one.
//!
//! # Invariants
//! - Column order is always `JobKind::fields()`, with `id` at position 1.
//! - `id` is never rewritten by replace.
//! - Read paths tolerate rows written by other tools (NULL text, REAL
//!   counts) and still yield fully-populated records.

use super::{RepoError, RepoResult, WriteAck};
use crate::model::normalize::{parse_count, RawRecord};
use crate::model::{JobId, JobKind};
use log::debug;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};
use std::marker::PhantomData;
use uuid::Uuid;

/// Persistence mapping for one record kind.
pub trait JobRecord: Sized {
    const KIND: JobKind;

    /// Normalizes untrusted input into this record kind.
    fn from_raw(input: &RawRecord) -> Self;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: JobId);

    /// Column values in `KIND.fields()` order.
    fn to_sql_values(&self) -> Vec<SqlValue>;

    /// Reads one row selected with `KIND.fields()` columns.
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Repository interface shared by both job kinds.
pub trait JobRepository<J: JobRecord> {
    fn list_jobs(&self) -> RepoResult<Vec<J>>;
    fn get_job(&self, id: &str) -> RepoResult<Option<J>>;
    /// Persists `job` as a new row, assigning an id when it has none.
    fn insert_job(&self, job: J) -> RepoResult<J>;
    /// Overwrites every column of the row addressed by `id`.
    fn replace_job(&self, id: &str, job: J) -> RepoResult<WriteAck>;
    fn delete_job(&self, id: &str) -> RepoResult<WriteAck>;
}

/// SQLite-backed job repository bound to one record kind.
pub struct SqliteJobRepository<'conn, J> {
    conn: &'conn Connection,
    _record: PhantomData<fn() -> J>,
}

impl<'conn, J: JobRecord> SqliteJobRepository<'conn, J> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }
}

impl<J: JobRecord> JobRepository<J> for SqliteJobRepository<'_, J> {
    fn list_jobs(&self) -> RepoResult<Vec<J>> {
        let kind = J::KIND;
        let mut stmt = self
            .conn
            .prepare_cached(&select_sql(kind, false))
            .map_err(RepoError::read(kind))?;
        let jobs = stmt
            .query_map([], J::from_row)
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(RepoError::read(kind))?;
        Ok(jobs)
    }

    fn get_job(&self, id: &str) -> RepoResult<Option<J>> {
        let kind = J::KIND;
        self.conn
            .prepare_cached(&select_sql(kind, true))
            .and_then(|mut stmt| stmt.query_row([id], J::from_row).optional())
            .map_err(RepoError::read(kind))
    }

    fn insert_job(&self, mut job: J) -> RepoResult<J> {
        let kind = J::KIND;
        if job.id().is_empty() {
            job.set_id(Uuid::new_v4().to_string());
        }

        self.conn
            .prepare_cached(&insert_sql(kind))
            .and_then(|mut stmt| stmt.execute(params_from_iter(job.to_sql_values())))
            .map_err(RepoError::write(kind))?;

        debug!(
            "event=job_insert module=repo status=ok kind={} id={}",
            kind,
            job.id()
        );
        Ok(job)
    }

    fn replace_job(&self, id: &str, mut job: J) -> RepoResult<WriteAck> {
        let kind = J::KIND;
        job.set_id(id.to_string());

        let rows_affected = self
            .conn
            .prepare_cached(&update_sql(kind))
            .and_then(|mut stmt| stmt.execute(params_from_iter(job.to_sql_values())))
            .map_err(RepoError::write(kind))?;

        debug!(
            "event=job_replace module=repo status=ok kind={} id={} rows_affected={}",
            kind, id, rows_affected
        );
        Ok(WriteAck {
            id: id.to_string(),
            rows_affected,
        })
    }

    fn delete_job(&self, id: &str) -> RepoResult<WriteAck> {
        let kind = J::KIND;
        let rows_affected = self
            .conn
            .execute(&format!("DELETE FROM {} WHERE id = ?1;", kind.table()), [id])
            .map_err(RepoError::write(kind))?;

        debug!(
            "event=job_delete module=repo status=ok kind={} id={} rows_affected={}",
            kind, id, rows_affected
        );
        Ok(WriteAck {
            id: id.to_string(),
            rows_affected,
        })
    }
}

fn select_sql(kind: JobKind, by_id: bool) -> String {
    let filter = if by_id { " WHERE id = ?1" } else { "" };
    format!(
        "SELECT {} FROM {}{filter};",
        kind.fields().join(", "),
        kind.table()
    )
}

fn insert_sql(kind: JobKind) -> String {
    let fields = kind.fields();
    let placeholders = (1..=fields.len())
        .map(|index| format!("?{index}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({placeholders});",
        kind.table(),
        fields.join(", ")
    )
}

fn update_sql(kind: JobKind) -> String {
    let assignments = kind
        .fields()
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, field)| format!("{field} = ?{}", index + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!("UPDATE {} SET {assignments} WHERE id = ?1;", kind.table())
}

pub(crate) fn text_column(row: &Row<'_>, column: &str) -> rusqlite::Result<String> {
    Ok(match row.get::<_, SqlValue>(column)? {
        SqlValue::Null => String::new(),
        SqlValue::Integer(value) => value.to_string(),
        SqlValue::Real(value) => value.to_string(),
        SqlValue::Text(value) => value,
        SqlValue::Blob(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
    })
}

pub(crate) fn count_column(row: &Row<'_>, column: &str) -> rusqlite::Result<i64> {
    Ok(match row.get::<_, SqlValue>(column)? {
        SqlValue::Integer(value) => value,
        SqlValue::Real(value) if value.is_finite() => value.trunc() as i64,
        SqlValue::Text(value) => parse_count(&value),
        _ => 0,
    })
}

pub(crate) fn flag_column(row: &Row<'_>, column: &str) -> rusqlite::Result<bool> {
    Ok(match row.get::<_, SqlValue>(column)? {
        SqlValue::Integer(value) => value != 0,
        SqlValue::Real(value) => value != 0.0,
        SqlValue::Text(value) => !value.is_empty(),
        SqlValue::Null | SqlValue::Blob(_) => false,
    })
}

pub(crate) fn flag_to_int(value: bool) -> i64 {
    i64::from(value)
}
