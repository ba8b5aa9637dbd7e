use anyhow::Context;

use habitlog::config::Config;
use habitlog::{db, router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "habitlog=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env()?;

    // Database
    let pool = db::create_pool(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database_url))?;

    db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");

    let addr = config.listen_addr();
    let state = AppState::new(pool, config);

    state
        .uploads
        .ensure_dir()
        .await
        .with_context(|| format!("Failed to create {}", state.uploads.dir().display()))?;

    let app = router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
