use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use chrono::{Local, NaiveDate};
use sqlx::SqlitePool;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod services;
pub mod templates;
pub mod uploads;

use config::Config;
use uploads::UploadStore;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        let uploads = UploadStore::new(config.upload_dir.clone());
        Self {
            db,
            config: Arc::new(config),
            uploads,
        }
    }
}

/// The server's calendar date. Entries are always filed under this, never a
/// client-supplied date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn router(state: AppState) -> Router {
    let photos = ServeDir::new(state.uploads.dir());

    Router::new()
        .route("/", get(handlers::home::home))
        .route(
            "/log",
            get(handlers::daily_logs::show_log_form).post(handlers::daily_logs::submit_log),
        )
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route("/api/entries", get(handlers::daily_logs::list_entries))
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .nest_service("/uploads", photos)
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
