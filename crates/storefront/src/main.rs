use anyhow::{Context, Result};
use shared::{
    config::{Config, ConnectionManager, ConnectionPool},
    utils::{ContextTimeout, init_logger},
};
use storefront::{handler::AppRouter, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard = init_logger("storefront", config.is_debug, config.enable_file_log);

    info!("🚀 Starting storefront service...");

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(db_pool, ContextTimeout::new(config.context_timeout));

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(&config, state)
        .await
        .context("Failed to start server")?;

    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("📦 Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("✅ Database migrations completed.");
    Ok(())
}
