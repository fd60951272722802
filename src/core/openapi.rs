use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::feature_flags::{
    dtos as feature_flags_dtos, handlers as feature_flags_handlers,
};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::update_category_by_id,
        categories_handlers::delete_category,
        // Products
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::update_product_by_id,
        products_handlers::delete_product,
        // Feature flags
        feature_flags_handlers::list_feature_flags,
        feature_flags_handlers::toggle_feature_flag,
    ),
    components(
        schemas(
            Meta,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CategoryPayloadDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Products
            products_dtos::ProductResponseDto,
            products_dtos::ProductPayloadDto,
            products_dtos::ProductPatchDto,
            products_dtos::CategoryRefDto,
            ApiResponse<products_dtos::ProductResponseDto>,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
            // Feature flags
            feature_flags_dtos::FeatureFlagResponseDto,
            feature_flags_dtos::ToggleFeatureFlagDto,
            ApiResponse<feature_flags_dtos::FeatureFlagResponseDto>,
            ApiResponse<Vec<feature_flags_dtos::FeatureFlagResponseDto>>,
        )
    ),
    tags(
        (name = "categories", description = "Product categories"),
        (name = "products", description = "Products, soft-deleted into the Deleted category"),
        (name = "feature-flags", description = "Feature flag administration"),
    ),
    info(
        title = "Catalog Service API",
        version = "0.1.0",
        description = "Categories, products and feature flags",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
