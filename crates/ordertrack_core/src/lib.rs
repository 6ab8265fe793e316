//! Core persistence and normalization for the order tracker.
//! This crate owns every invariant about breaking/loading job records at rest.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::breaking_job::BreakingJob;
pub use model::loading_job::LoadingJob;
pub use model::normalize::{raw_record_from_value, RawRecord};
pub use model::{normalize, Job, JobId, JobKind};
pub use repo::breaking_repo::SqliteBreakingRepository;
pub use repo::job_repo::{JobRecord, JobRepository, SqliteJobRepository};
pub use repo::loading_repo::SqliteLoadingRepository;
pub use repo::{RepoError, RepoResult, WriteAck};
pub use service::job_service::{BreakingJobService, JobService, LoadingJobService};

/// Minimal health-check API for wiring checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
