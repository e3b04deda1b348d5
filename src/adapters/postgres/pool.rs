//! Connection pool construction.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Create a PostgreSQL pool from configuration and verify it answers.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.pool_size)
        .acquire_timeout(config.connect_timeout())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database("Failed to connect to database", e))?;

    health_check(&pool).await?;

    tracing::info!(
        pool_size = config.pool_size,
        "Database connection pool created"
    );
    Ok(pool)
}

/// Round-trips a trivial query.
pub async fn health_check(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| DomainError::database("Database health check failed", e))?;
    Ok(())
}
