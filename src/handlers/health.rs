use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Ready once the database answers and the photo directory exists.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let db_ok = sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.db)
        .await
        .is_ok();
    let uploads_ok = tokio::fs::metadata(state.uploads.dir())
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);

    let status = if db_ok && uploads_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let check = |ok: bool| if ok { "ok" } else { "failed" };

    (
        status,
        Json(json!({
            "status": if status.is_success() { "ready" } else { "not_ready" },
            "checks": {
                "database": check(db_ok),
                "uploads": check(uploads_ok),
            },
        })),
    )
}
