//! Job record model for the breaking and loading work queues.
//!
//! # Responsibility
//! - Define the strictly-typed record shapes persisted by core.
//! - Own the normalization policy that turns untrusted input into records.
//!
//! # Invariants
//! - Every record carries every declared field; nothing is optional at rest.
//! - An empty `id` means "not yet assigned"; repositories fill it on insert.

pub mod breaking_job;
pub mod loading_job;
pub mod normalize;

use breaking_job::BreakingJob;
use loading_job::LoadingJob;
use normalize::RawRecord;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Stable job identifier, a UUID string when assigned by core.
pub type JobId = String;

/// The two record kinds, each backed by its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    Breaking,
    Loading,
}

impl JobKind {
    /// Table holding rows of this kind.
    pub fn table(self) -> &'static str {
        match self {
            Self::Breaking => "breaking",
            Self::Loading => "loading",
        }
    }

    /// Parses a kind from its table name.
    pub fn from_table(value: &str) -> Option<Self> {
        match value {
            "breaking" => Some(Self::Breaking),
            "loading" => Some(Self::Loading),
            _ => None,
        }
    }

    /// Declared wire field names for this kind, `id` first.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Breaking => BreakingJob::FIELDS,
            Self::Loading => LoadingJob::FIELDS,
        }
    }
}

impl Display for JobKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

/// A normalized record of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Job {
    Breaking(BreakingJob),
    Loading(LoadingJob),
}

impl Job {
    pub fn kind(&self) -> JobKind {
        match self {
            Self::Breaking(_) => JobKind::Breaking,
            Self::Loading(_) => JobKind::Loading,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Breaking(job) => &job.id,
            Self::Loading(job) => &job.id,
        }
    }
}

/// Normalizes untrusted input into a well-formed record of `kind`.
///
/// Total over all inputs: unknown keys are dropped, wrong-typed values are
/// coerced and missing fields take their defaults.
pub fn normalize(kind: JobKind, input: &RawRecord) -> Job {
    match kind {
        JobKind::Breaking => Job::Breaking(BreakingJob::from_raw(input)),
        JobKind::Loading => Job::Loading(LoadingJob::from_raw(input)),
    }
}
