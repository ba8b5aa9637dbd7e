//! Server-rendered pages.

use askama::Template;
use axum::response::Html;
use chrono::NaiveDate;

use crate::error::AppResult;
use crate::models::entry::Entry;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub today: NaiveDate,
    pub existing: Option<Entry>,
}

#[derive(Template)]
#[template(path = "log.html")]
pub struct LogPage {
    pub today: NaiveDate,
    pub existing: Option<Entry>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub flash: Option<String>,
    pub entries: Vec<Entry>,
}

pub fn render<T: Template>(page: &T) -> AppResult<Html<String>> {
    Ok(Html(page.render()?))
}
