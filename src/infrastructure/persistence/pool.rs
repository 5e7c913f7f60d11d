use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::Config;

/// Opens the connection pool, retrying with exponential backoff.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    info!(
        "Connecting to database {} on {}",
        config.name, config.server
    );

    let uri = config.uri();
    let mut retries = config.db_connect_retries;
    let mut delay = Duration::from_secs(1);
    let pool = loop {
        match PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .min_connections(config.db_min_connections)
            .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
            .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout_secs)))
            .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime_secs)))
            .connect(&uri)
            .await
        {
            Ok(pool) => break pool,
            Err(e) if retries > 0 => {
                retries -= 1;
                tracing::warn!(
                    "Database connection failed, retrying in {:?} ({} retries left): {}",
                    delay,
                    retries,
                    e
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => {
                tracing::error!("Failed to connect to database after retries: {}", e);
                return Err(e);
            }
        }
    };

    info!(
        max = config.db_max_connections,
        min = config.db_min_connections,
        acquire_timeout_secs = config.db_acquire_timeout_secs,
        idle_timeout_secs = config.db_idle_timeout_secs,
        max_lifetime_secs = config.db_max_lifetime_secs,
        "Database pool configured"
    );

    Ok(pool)
}
