//! Breaking job record.
//!
//! # Invariants
//! - `bales` is an integer; non-numeric input has already become `0`.
//! - `ready` is persisted as exactly `0` or `1`.

use super::normalize::{coerce_count, coerce_flag, coerce_text, RawRecord};
use super::JobId;
use serde::{Deserialize, Serialize};

/// A bale-breaking work item tied to an order mark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakingJob {
    /// Empty until the repository assigns one on insert.
    pub id: JobId,
    pub mark: String,
    pub order_id: String,
    /// Negative counts are stored as given.
    pub bales: i64,
    pub status: String,
    pub breaker: String,
    pub hauler: String,
    pub date_to_load: String,
    pub completed_date: String,
    pub location: String,
    pub ready: bool,
}

impl BreakingJob {
    /// Declared wire field names, which are also the table's column names.
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "mark",
        "orderId",
        "bales",
        "status",
        "breaker",
        "hauler",
        "dateToLoad",
        "completedDate",
        "location",
        "ready",
    ];

    /// Builds a fully-defaulted record from untrusted input.
    ///
    /// Only keys in [`Self::FIELDS`] are read, so unknown input never
    /// reaches the record.
    pub fn from_raw(input: &RawRecord) -> Self {
        let text = |key: &str| coerce_text(input.get(key));
        Self {
            id: text("id"),
            mark: text("mark"),
            order_id: text("orderId"),
            bales: coerce_count(input.get("bales")),
            status: text("status"),
            breaker: text("breaker"),
            hauler: text("hauler"),
            date_to_load: text("dateToLoad"),
            completed_date: text("completedDate"),
            location: text("location"),
            ready: coerce_flag(input.get("ready")),
        }
    }
}
