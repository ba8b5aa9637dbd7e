use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One day's record. `log_date` is unique across the table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub log_date: NaiveDate,
    pub am_done: bool,
    pub pm_done: bool,
    pub notes: String,
    /// Stored filename under the upload directory.
    pub photo: Option<String>,
    pub updated_at: NaiveDateTime,
}

/// Values written by a submission. A `None` photo keeps whatever is stored.
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub am_done: bool,
    pub pm_done: bool,
    pub notes: String,
    pub photo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EntryRangeQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
