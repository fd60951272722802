use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{CategoryPayloadDto, CategoryResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

fn validate_payload(dto: &CategoryPayloadDto) -> Result<()> {
    dto.validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))
}

/// List all categories except the reserved ones
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::list(categories)))
}

/// Get category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryPayloadDto,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Blank, reserved or duplicate title")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CategoryPayloadDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    validate_payload(&dto)?;
    let category = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Update a category identified by the payload `id`
#[utoipa::path(
    put,
    path = "/api/categories",
    request_body = CategoryPayloadDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Missing id, blank, reserved or duplicate title"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CategoryPayloadDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    validate_payload(&dto)?;
    let category = service.update(dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Update a category identified by path
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = CategoryPayloadDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Blank, reserved or duplicate title"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn update_category_by_id(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<CategoryPayloadDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    validate_payload(&dto)?;
    let category = service.update_by_id(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

/// Delete a category, moving its products to "No Category"
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 400, description = "Reserved category"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Sentinel category missing")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_by_id(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some(format!("Category {} deleted", id)),
        None,
    )))
}
