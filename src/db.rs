use anyhow::Result;
use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::AppConfig;

pub type DbPool = PgPool;
pub type OrmConn = DatabaseConnection;

/// Connect to Postgres, retrying a bounded number of times with a fixed delay.
///
/// The last connection error is returned once the attempts are exhausted so the
/// caller can terminate the process.
pub async fn create_pool(config: &AppConfig) -> Result<DbPool> {
    let attempts = config.connect_retries.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        let result = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await;
        match result {
            Ok(pool) => {
                tracing::info!(attempt, "connected to the database");
                return Ok(pool);
            }
            Err(err) if attempt < attempts => {
                tracing::warn!(
                    error = %err,
                    attempt,
                    max_attempts = attempts,
                    delay_ms = %config.connect_delay.as_millis(),
                    "database connection failed, retrying"
                );
                tokio::time::sleep(config.connect_delay).await;
            }
            Err(err) => {
                tracing::error!(error = %err, attempts, "max connection attempts reached");
                return Err(err.into());
            }
        }
    }
}

/// Wrap an existing sqlx pool in a SeaORM connection sharing the same connections.
pub fn orm_from_pool(pool: &DbPool) -> OrmConn {
    SqlxPostgresConnector::from_sqlx_postgres_pool(pool.clone())
}

/// Apply the SQL files in `migrations/` that have not run yet.
pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
