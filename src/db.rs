//! Database connection pool and migration utilities.
//!
//! Provides functions for creating the MySQL connection pool shared by all
//! handlers and for applying the bundled `clientes` schema.

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

use crate::config::Config;

/// Creates a MySQL connection pool with the configured settings.
///
/// # Arguments
/// * `config` - Application configuration (URL, pool size, acquire timeout)
///
/// # Returns
/// * `Ok(MySqlPool)` - A configured connection pool
/// * `Err(sqlx::Error)` - If the database URL cannot be parsed
///
/// # Configuration
/// - Maximum connections: `DB_MAX_CONNECTIONS` (default 20)
/// - Acquire timeout: `DB_ACQUIRE_TIMEOUT_SECS` (default 30 seconds)
///
/// Connections are opened on first checkout, so an unreachable database does
/// not stop the service; each query then fails and the handler answers 500.
/// Checkouts beyond the maximum wait in the pool's queue, which has no size
/// limit. Connection lifecycle events are logged but never fail a checkout.
pub fn create_pool(config: &Config) -> Result<MySqlPool, sqlx::Error> {
    pool_options(config)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                match sqlx::query_scalar::<_, u64>("SELECT CONNECTION_ID()")
                    .fetch_one(&mut *conn)
                    .await
                {
                    Ok(id) => tracing::info!(connection_id = id, "Database connection established"),
                    Err(e) => tracing::warn!("Database connection established, id unavailable: {}", e),
                }
                Ok(())
            })
        })
        .after_release(|_conn, meta| {
            Box::pin(async move {
                tracing::debug!(age = ?meta.age, "Database connection released");
                Ok(true)
            })
        })
        .connect_lazy(&config.database_url)
        .inspect_err(|e| tracing::error!("Invalid database URL: {}", e))
}

/// Runs a trivial query to check that the database answers.
pub async fn check_connection(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

fn pool_options(config: &Config) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
}

/// Runs all pending database migrations.
///
/// Only invoked when `RUN_MIGRATIONS` is enabled; deployments against an
/// existing schema leave it off.
pub async fn run_migrations(pool: &MySqlPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
