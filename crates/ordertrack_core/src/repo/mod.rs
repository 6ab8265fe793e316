//! Repository layer for job persistence.
//!
//! # Responsibility
//! - Define the list/get/insert/replace/delete contract shared by both kinds.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Each operation is a single SQL statement; there is no partial write.
//! - Storage errors propagate unchanged as `RepoError::Read`/`RepoError::Write`.
//! - Replace/delete of a missing id is success with `rows_affected == 0`.

pub mod breaking_repo;
pub mod job_repo;
pub mod loading_repo;

use crate::model::{JobId, JobKind};
use rusqlite::ErrorCode;
use serde::Serialize;
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage failure reported by a job repository.
#[derive(Debug, Error)]
pub enum RepoError {
    /// An insert, replace or delete could not be committed.
    #[error("failed to write {kind} job: {source}")]
    Write {
        kind: JobKind,
        #[source]
        source: rusqlite::Error,
    },
    /// A list or lookup could not complete.
    #[error("failed to read {kind} jobs: {source}")]
    Read {
        kind: JobKind,
        #[source]
        source: rusqlite::Error,
    },
}

impl RepoError {
    pub(crate) fn write(kind: JobKind) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| Self::Write { kind, source }
    }

    pub(crate) fn read(kind: JobKind) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| Self::Read { kind, source }
    }

    /// Record kind whose table the failing statement targeted.
    pub fn kind(&self) -> JobKind {
        match self {
            Self::Write { kind, .. } | Self::Read { kind, .. } => *kind,
        }
    }

    /// Whether the store rejected the write on a constraint, such as a
    /// caller-supplied `id` that already exists.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Write { source, .. } => {
                source.sqlite_error_code() == Some(ErrorCode::ConstraintViolation)
            }
            Self::Read { .. } => false,
        }
    }
}

/// Confirmation returned by replace and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteAck {
    pub id: JobId,
    /// `0` when no row carried `id`; the operation still succeeded.
    pub rows_affected: usize,
}

impl WriteAck {
    /// Whether a stored row matched the addressed id.
    pub fn matched(&self) -> bool {
        self.rows_affected > 0
    }
}
