use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::feature_flags::dtos::{FeatureFlagResponseDto, ToggleFeatureFlagDto};
use crate::features::feature_flags::repositories::FeatureFlagGateway;

/// Administration of feature flags
pub struct FeatureFlagService {
    gateway: Arc<dyn FeatureFlagGateway>,
}

impl FeatureFlagService {
    pub fn new(gateway: Arc<dyn FeatureFlagGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<FeatureFlagResponseDto>> {
        let flags = self.gateway.find_all().await?;
        Ok(flags.into_iter().map(|f| f.into()).collect())
    }

    pub async fn toggle(
        &self,
        name: &str,
        dto: ToggleFeatureFlagDto,
    ) -> Result<FeatureFlagResponseDto> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Feature name is required".to_string(),
            ));
        }

        let flag = self.gateway.set_enabled(name, dto.enabled).await?;

        tracing::info!("Feature '{}' set to enabled={}", flag.name, flag.enabled);

        Ok(flag.into())
    }
}
