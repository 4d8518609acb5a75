use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::config;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Fallback used when DATABASE_URL is unset. The pool connects lazily, so
/// the server still starts and /health reports the database as degraded.
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/jobboard";

/// Holder of the single shared connection pool. The pool is created lazily
/// on first use; no connection is attempted at startup.
pub struct DatabaseManager;

impl DatabaseManager {
    pub fn pool() -> Result<PgPool, DatabaseError> {
        static POOL: OnceLock<PgPool> = OnceLock::new();

        if let Some(pool) = POOL.get() {
            return Ok(pool.clone());
        }

        let url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                warn!("DATABASE_URL not set, falling back to {}", DEFAULT_DATABASE_URL);
                DEFAULT_DATABASE_URL.to_string()
            }
        };

        let db_config = &config::config().database;
        let pool = PgPoolOptions::new()
            .max_connections(db_config.max_connections)
            .acquire_timeout(Duration::from_secs(db_config.connection_timeout))
            .connect_lazy(&url)?;

        info!("Created database pool (max_connections={})", db_config.max_connections);
        Ok(POOL.get_or_init(|| pool).clone())
    }

    /// Apply pending migrations. Skipped entirely when DATABASE_URL is not
    /// configured, so local runs without a database still boot.
    pub async fn migrate() -> Result<(), DatabaseError> {
        if std::env::var("DATABASE_URL").is_err() {
            warn!("DATABASE_URL not set, skipping migrations");
            return Ok(());
        }
        let pool = Self::pool()?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
        Ok(())
    }
}
