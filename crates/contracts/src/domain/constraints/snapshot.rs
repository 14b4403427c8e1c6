use serde::{Deserialize, Serialize};

/// Full copy of the sheet state handed to a
/// [`SaveSink`](super::sheet::SaveSink).
///
/// Records are listed in seed order (days first-to-last, items in catalog
/// order within each day) so repeated snapshots of the same state compare
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSnapshot {
    pub days: Vec<DayRecord>,
    pub products: Vec<ProductRecord>,
}

/// Day-level state as saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub day: String,
    pub is_holiday: bool,
}

/// Per-(day, item) state as saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub day: String,
    pub item_id: String,
    pub min_order_value: String,
    pub availability: String,
    pub is_disabled: bool,
}
