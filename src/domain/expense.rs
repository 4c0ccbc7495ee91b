use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category applied when an expense is recorded without one.
pub const DEFAULT_EXPENSE_CATEGORY: &str = "Other";

/// A single expense entry, linked to a farmer by id. Immutable once
/// recorded; only deletable. The persisted field name for the link is
/// `farmerId`, matching the on-disk document format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: u32,
    #[serde(rename = "farmerId")]
    pub farmer_id: u32,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
}
