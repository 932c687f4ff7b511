use crate::config::get_config;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Connects with the configured pool size; connections are checked before reuse.
pub async fn create_pool() -> Result<PgPool> {
    let config = get_config();
    tracing::info!(
        max_connections = config.db_max_connections,
        "Connecting to database"
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .test_before_acquire(true)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}
