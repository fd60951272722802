use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::feature_flags::models::FeatureFlag;

/// Response DTO for feature flag state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeatureFlagResponseDto {
    pub name: String,
    pub enabled: bool,
    pub strategy: Option<String>,
    pub params: HashMap<String, String>,
    pub updated_at: DateTime<Utc>,
}

impl From<FeatureFlag> for FeatureFlagResponseDto {
    fn from(flag: FeatureFlag) -> Self {
        Self {
            name: flag.name,
            enabled: flag.enabled,
            strategy: flag.strategy,
            params: flag.params.0,
            updated_at: flag.updated_at,
        }
    }
}

/// Request DTO for switching a feature on or off
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToggleFeatureFlagDto {
    pub enabled: bool,
}
