use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::db::entries;
use crate::error::AppResult;
use crate::forms::LogSubmission;
use crate::models::entry::{Entry, EntryUpdate};
use crate::uploads::{self, UploadStore};

/// Records a submission as the entry for `today`.
///
/// An allowed photo is written to disk before the row is saved, so a failed
/// database write can leave an unreferenced file behind.
pub async fn record_entry(
    db: &SqlitePool,
    store: &UploadStore,
    today: NaiveDate,
    submission: LogSubmission,
) -> AppResult<Entry> {
    let mut photo = None;
    if let Some(upload) = submission.photo {
        match uploads::stored_name(today, &upload.filename) {
            Some(name) => {
                store.save(&name, &upload.bytes).await?;
                tracing::info!(photo = %name, bytes = upload.bytes.len(), "Saved photo");
                photo = Some(name);
            }
            None => {
                tracing::debug!(filename = %upload.filename, "Ignoring disallowed upload");
            }
        }
    }

    let update = EntryUpdate {
        am_done: submission.am_done,
        pm_done: submission.pm_done,
        notes: submission.notes,
        photo,
    };
    let entry = entries::upsert(db, today, &update).await?;

    tracing::info!(
        entry_id = entry.id,
        log_date = %entry.log_date,
        am_done = entry.am_done,
        pm_done = entry.pm_done,
        "Saved daily entry"
    );

    Ok(entry)
}
