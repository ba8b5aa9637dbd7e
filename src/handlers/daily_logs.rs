use axum::{
    extract::{Multipart, Query, State},
    response::{Html, Redirect},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Duration;

use crate::db::entries;
use crate::error::{AppError, AppResult};
use crate::flash;
use crate::forms::LogSubmission;
use crate::models::entry::{Entry, EntryRangeQuery};
use crate::services::daily_log;
use crate::templates::{render, LogPage};
use crate::{local_today, AppState};

pub async fn show_log_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let today = local_today();
    let existing = entries::find_by_date(&state.db, today).await?;

    render(&LogPage { today, existing })
}

pub async fn submit_log(
    State(state): State<AppState>,
    jar: CookieJar,
    multipart: Multipart,
) -> AppResult<(CookieJar, Redirect)> {
    let submission = LogSubmission::from_multipart(multipart).await?;
    daily_log::record_entry(&state.db, &state.uploads, local_today(), submission).await?;

    Ok((flash::set(jar, flash::SAVED), Redirect::to("/dashboard")))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<EntryRangeQuery>,
) -> AppResult<Json<Vec<Entry>>> {
    let end = query.end_date.unwrap_or_else(local_today);
    let start = query
        .start_date
        .unwrap_or_else(|| end - Duration::days(30));

    if start > end {
        return Err(AppError::Validation(
            "start_date must not be after end_date".into(),
        ));
    }

    let logs = entries::list_between(&state.db, start, end).await?;

    Ok(Json(logs))
}
