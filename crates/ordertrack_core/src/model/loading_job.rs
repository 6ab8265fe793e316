//! Loading job record.

use super::normalize::{coerce_text, RawRecord};
use super::JobId;
use serde::{Deserialize, Serialize};

/// A vehicle loading work item tied to an order mark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadingJob {
    /// Empty until the repository assigns one on insert.
    pub id: JobId,
    pub mark: String,
    pub order_id: String,
    pub date_to_load: String,
    pub location: String,
    pub clear_date: String,
    pub date_loaded: String,
    pub status: String,
    pub loaded_by: String,
    /// Job classification, `type` on the wire and in storage.
    #[serde(rename = "type")]
    pub kind: String,
    pub vehicle_id: String,
    pub driver_name: String,
    pub phone: String,
}

impl LoadingJob {
    /// Declared wire field names, which are also the table's column names.
    pub const FIELDS: &'static [&'static str] = &[
        "id",
        "mark",
        "orderId",
        "dateToLoad",
        "location",
        "clearDate",
        "dateLoaded",
        "status",
        "loadedBy",
        "type",
        "vehicleId",
        "driverName",
        "phone",
    ];

    /// Builds a fully-defaulted record from untrusted input.
    pub fn from_raw(input: &RawRecord) -> Self {
        let text = |key: &str| coerce_text(input.get(key));
        Self {
            id: text("id"),
            mark: text("mark"),
            order_id: text("orderId"),
            date_to_load: text("dateToLoad"),
            location: text("location"),
            clear_date: text("clearDate"),
            date_loaded: text("dateLoaded"),
            status: text("status"),
            loaded_by: text("loadedBy"),
            kind: text("type"),
            vehicle_id: text("vehicleId"),
            driver_name: text("driverName"),
            phone: text("phone"),
        }
    }
}
