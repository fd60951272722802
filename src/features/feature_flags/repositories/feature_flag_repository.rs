use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::feature_flags::models::FeatureFlag;

/// Source of feature flag state.
///
/// Reads have no side effects; `set_enabled` is the only mutation.
#[async_trait]
pub trait FeatureFlagGateway: Send + Sync {
    /// Unknown flags read as inactive
    async fn is_active(&self, name: &str) -> Result<bool>;

    async fn find_all(&self) -> Result<Vec<FeatureFlag>>;

    /// Create or update the flag and return its new state
    async fn set_enabled(&self, name: &str, enabled: bool) -> Result<FeatureFlag>;
}

/// PostgreSQL-backed feature flags
pub struct PgFeatureFlagRepository {
    pool: PgPool,
}

impl PgFeatureFlagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeatureFlagGateway for PgFeatureFlagRepository {
    async fn is_active(&self, name: &str) -> Result<bool> {
        let enabled = sqlx::query_scalar::<_, bool>(
            "SELECT enabled FROM feature_flags WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to read feature flag '{}': {:?}", name, e);
            AppError::Database(e)
        })?;

        Ok(enabled.unwrap_or(false))
    }

    async fn find_all(&self) -> Result<Vec<FeatureFlag>> {
        sqlx::query_as::<_, FeatureFlag>(
            r#"
            SELECT name, enabled, strategy, params, updated_at
            FROM feature_flags
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list feature flags: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn set_enabled(&self, name: &str, enabled: bool) -> Result<FeatureFlag> {
        sqlx::query_as::<_, FeatureFlag>(
            r#"
            INSERT INTO feature_flags (name, enabled)
            VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE SET enabled = EXCLUDED.enabled, updated_at = NOW()
            RETURNING name, enabled, strategy, params, updated_at
            "#,
        )
        .bind(name)
        .bind(enabled)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to toggle feature flag '{}': {:?}", name, e);
            AppError::Database(e)
        })
    }
}
