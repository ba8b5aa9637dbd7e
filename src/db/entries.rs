//! Queries against the `entries` table.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::entry::{Entry, EntryUpdate};

/// Number of days the dashboard shows.
pub const DASHBOARD_LIMIT: i64 = 30;

pub async fn find_by_date(db: &SqlitePool, log_date: NaiveDate) -> Result<Option<Entry>, sqlx::Error> {
    sqlx::query_as::<_, Entry>("SELECT * FROM entries WHERE log_date = ?1")
        .bind(log_date)
        .fetch_optional(db)
        .await
}

/// Inserts the row for `log_date` or overwrites it in place.
///
/// Flags and notes are replaced wholesale; the photo only changes when the
/// update carries one.
pub async fn upsert(
    db: &SqlitePool,
    log_date: NaiveDate,
    update: &EntryUpdate,
) -> Result<Entry, sqlx::Error> {
    sqlx::query_as::<_, Entry>(
        r#"
        INSERT INTO entries (log_date, am_done, pm_done, notes, photo)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT (log_date) DO UPDATE SET
            am_done = excluded.am_done,
            pm_done = excluded.pm_done,
            notes = excluded.notes,
            photo = COALESCE(excluded.photo, entries.photo),
            updated_at = CURRENT_TIMESTAMP
        RETURNING *
        "#,
    )
    .bind(log_date)
    .bind(update.am_done)
    .bind(update.pm_done)
    .bind(&update.notes)
    .bind(&update.photo)
    .fetch_one(db)
    .await
}

/// Most recent entries by date, newest first.
pub async fn list_recent(db: &SqlitePool, limit: i64) -> Result<Vec<Entry>, sqlx::Error> {
    sqlx::query_as::<_, Entry>("SELECT * FROM entries ORDER BY log_date DESC LIMIT ?1")
        .bind(limit)
        .fetch_all(db)
        .await
}

pub async fn list_between(
    db: &SqlitePool,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Entry>, sqlx::Error> {
    sqlx::query_as::<_, Entry>(
        r#"
        SELECT * FROM entries
        WHERE log_date BETWEEN ?1 AND ?2
        ORDER BY log_date DESC
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
}
