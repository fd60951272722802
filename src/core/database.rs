use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use crate::shared::constants::RESERVED_CATEGORY_TITLES;

/// Build the catalog connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Apply embedded migrations (schema plus sentinel category seed)
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))
}

/// Report sentinel categories missing from the store.
///
/// Deletes fail with an inconsistent-state fault while a sentinel is absent,
/// so surface it at boot instead of on the first delete request.
pub async fn missing_sentinels(pool: &PgPool) -> Result<Vec<&'static str>, sqlx::Error> {
    let mut missing = Vec::new();

    for title in RESERVED_CATEGORY_TITLES {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE LOWER(title) = LOWER($1))",
        )
        .bind(title)
        .fetch_one(pool)
        .await?;

        if !exists {
            missing.push(title);
        }
    }

    Ok(missing)
}
