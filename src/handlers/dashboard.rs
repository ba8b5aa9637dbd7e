use axum::{extract::State, response::Html};
use axum_extra::extract::cookie::CookieJar;

use crate::db::entries::{self, DASHBOARD_LIMIT};
use crate::error::AppResult;
use crate::flash;
use crate::templates::{render, DashboardPage};
use crate::AppState;

pub async fn dashboard(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, Html<String>)> {
    let entries = entries::list_recent(&state.db, DASHBOARD_LIMIT).await?;
    let (jar, flash) = flash::take(jar);

    let page = render(&DashboardPage { flash, entries })?;
    Ok((jar, page))
}
