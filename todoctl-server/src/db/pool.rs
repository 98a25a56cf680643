//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is
//! constructed once at startup and handed to the HTTP state; handlers
//! borrow connections per statement and release them on completion.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbConfig;

/// Create a PostgreSQL connection pool from config.
///
/// The pool is bounded at `config.max_connections`; when exhausted,
/// acquisition waits for a connection to free up.
///
/// # Errors
///
/// Returns an error if the initial connection fails.
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_url(&config.url(), config.max_connections).await
}

/// Create a pool from an explicit connection URL.
///
/// Used when DATABASE_URL overrides the individual connection fields.
pub async fn create_pool_with_url(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
