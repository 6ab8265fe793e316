//! Job use-case service.
//!
//! # Responsibility
//! - Expose list/insert/replace/delete over raw caller input.
//! - Normalize every write so repositories only see well-formed records.
//!
//! # Invariants
//! - Replace re-derives the whole record from input; it never merges with
//!   the stored row.
//! - Replace ignores any `id` inside the input in favour of the addressed id.

use crate::model::breaking_job::BreakingJob;
use crate::model::loading_job::LoadingJob;
use crate::model::normalize::RawRecord;
use crate::repo::breaking_repo::SqliteBreakingRepository;
use crate::repo::job_repo::{JobRecord, JobRepository};
use crate::repo::loading_repo::SqliteLoadingRepository;
use crate::repo::{RepoResult, WriteAck};
use rusqlite::Connection;
use std::marker::PhantomData;

/// Use-case service wrapper for one job kind.
pub struct JobService<J, R> {
    repo: R,
    _record: PhantomData<fn() -> J>,
}

/// Breaking job service over a borrowed SQLite connection.
pub type BreakingJobService<'conn> = JobService<BreakingJob, SqliteBreakingRepository<'conn>>;

/// Loading job service over a borrowed SQLite connection.
pub type LoadingJobService<'conn> = JobService<LoadingJob, SqliteLoadingRepository<'conn>>;

impl<J: JobRecord, R: JobRepository<J>> JobService<J, R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _record: PhantomData,
        }
    }

    /// Returns every stored record of this kind.
    pub fn list(&self) -> RepoResult<Vec<J>> {
        self.repo.list_jobs()
    }

    pub fn get(&self, id: &str) -> RepoResult<Option<J>> {
        self.repo.get_job(id)
    }

    /// Normalizes `input` and stores it as a new record.
    ///
    /// Returns the stored record including its assigned id.
    pub fn insert(&self, input: &RawRecord) -> RepoResult<J> {
        self.repo.insert_job(J::from_raw(input))
    }

    /// Overwrites the record addressed by `id` with normalized `input`.
    pub fn replace(&self, id: &str, input: &RawRecord) -> RepoResult<WriteAck> {
        self.repo.replace_job(id, J::from_raw(input))
    }

    /// Removes the record addressed by `id`; missing ids are not an error.
    pub fn delete(&self, id: &str) -> RepoResult<WriteAck> {
        self.repo.delete_job(id)
    }
}

impl<'conn> BreakingJobService<'conn> {
    pub fn sqlite(conn: &'conn Connection) -> Self {
        Self::new(SqliteBreakingRepository::new(conn))
    }
}

impl<'conn> LoadingJobService<'conn> {
    pub fn sqlite(conn: &'conn Connection) -> Self {
        Self::new(SqliteLoadingRepository::new(conn))
    }
}
