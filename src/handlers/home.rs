use axum::{extract::State, response::Html};

use crate::db::entries;
use crate::error::AppResult;
use crate::templates::{render, HomePage};
use crate::{local_today, AppState};

pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let today = local_today();
    let existing = entries::find_by_date(&state.db, today).await?;

    render(&HomePage { today, existing })
}
