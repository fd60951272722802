use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::products::dtos::{ProductPatchDto, ProductPayloadDto, ProductResponseDto};
use crate::features::products::services::ProductService;
use crate::shared::types::ApiResponse;

fn validate_dto<T: Validate>(dto: &T) -> Result<()> {
    dto.validate()
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))
}

/// List products that are not soft-deleted
///
/// Prices reflect the product discount while the `PRODUCT_DISCOUNT` flag is enabled.
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponseDto>>),
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let products = service.list().await?;
    Ok(Json(ApiResponse::list(products)))
}

/// Get product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponseDto>),
        (status = 404, description = "Product not found or deleted")
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = ProductPayloadDto,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Missing or invalid field"),
        (status = 404, description = "Category not found")
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<ProductPayloadDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    validate_dto(&dto)?;
    let product = service.create(dto).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Replace a product identified by the payload `id`
#[utoipa::path(
    put,
    path = "/api/products",
    request_body = ProductPayloadDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Missing or invalid field"),
        (status = 404, description = "Product or category not found")
    ),
    tag = "products"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<ProductPayloadDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    validate_dto(&dto)?;
    let product = service.update(dto).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Partially update a product identified by path
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductPatchDto,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Invalid field"),
        (status = 404, description = "Product or category not found")
    ),
    tag = "products"
)]
pub async fn update_product_by_id(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<ProductPatchDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    validate_dto(&dto)?;
    let product = service.update_by_id(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Soft-delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product moved to the Deleted category"),
        (status = 404, description = "Product not found or already deleted"),
        (status = 500, description = "Sentinel category missing")
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete_by_id(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some(format!("Product {} deleted", id)),
        None,
    )))
}
