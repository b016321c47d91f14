use anyhow::{Context, Result};
use inventory::{handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager, ConnectionPool},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    init_logger("inventory");

    info!("🚀 Starting inventory service...");

    let pool = ConnectionManager::new_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
        info!("✅ Database migrations applied");
    }

    let state = AppState::new(pool, &config);

    AppRouter::serve(config.port, state)
        .await
        .context("Server exited with an error")?;

    info!("✅ Inventory service shutdown complete");

    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
