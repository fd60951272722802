use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::feature_flags::dtos::{FeatureFlagResponseDto, ToggleFeatureFlagDto};
use crate::features::feature_flags::services::FeatureFlagService;
use crate::shared::types::ApiResponse;

/// List all feature flags with their current state
#[utoipa::path(
    get,
    path = "/api/actuator/features",
    responses(
        (status = 200, description = "List of feature flags", body = ApiResponse<Vec<FeatureFlagResponseDto>>),
    ),
    tag = "feature-flags"
)]
pub async fn list_feature_flags(
    State(service): State<Arc<FeatureFlagService>>,
) -> Result<Json<ApiResponse<Vec<FeatureFlagResponseDto>>>> {
    tracing::info!("Fetching all feature flag states");
    let flags = service.list().await?;
    Ok(Json(ApiResponse::list(flags)))
}

/// Enable or disable a feature flag
#[utoipa::path(
    post,
    path = "/api/actuator/features/{name}",
    params(
        ("name" = String, Path, description = "Feature name")
    ),
    request_body = ToggleFeatureFlagDto,
    responses(
        (status = 200, description = "Updated feature flag", body = ApiResponse<FeatureFlagResponseDto>),
        (status = 400, description = "Invalid feature name or body")
    ),
    tag = "feature-flags"
)]
pub async fn toggle_feature_flag(
    State(service): State<Arc<FeatureFlagService>>,
    Path(name): Path<String>,
    AppJson(dto): AppJson<ToggleFeatureFlagDto>,
) -> Result<Json<ApiResponse<FeatureFlagResponseDto>>> {
    tracing::info!("Toggling feature '{}'", name);
    let flag = service.toggle(&name, dto).await?;
    Ok(Json(ApiResponse::success(Some(flag), None, None)))
}
