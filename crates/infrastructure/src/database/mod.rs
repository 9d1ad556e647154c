use livemap_domain::config::DatabaseConfig;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::time::Duration;

/// Connect to the account database.
///
/// The `Any` driver picks MySQL or SQLite from the URL scheme.
pub async fn create_pool(cfg: &DatabaseConfig) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(cfg.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .connect(&cfg.url)
        .await?;

    // connect() already opened a connection; ping so a bad URL fails at startup
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}
