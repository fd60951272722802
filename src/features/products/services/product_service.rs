use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::feature_flags::repositories::FeatureFlagGateway;
use crate::features::products::dtos::{ProductPatchDto, ProductPayloadDto, ProductResponseDto};
use crate::features::products::models::SaveProduct;
use crate::features::products::repositories::ProductRepository;
use crate::shared::constants::{DELETED_CATEGORY_TITLE, PRODUCT_DISCOUNT_FEATURE};
use crate::shared::validation::{
    require_non_negative_quantity, require_present, require_storable_price, require_text,
    titles_match,
};

/// Product fields after the create/replace guard pipeline
#[derive(Debug)]
struct ValidatedProduct {
    title: String,
    image_url: String,
    sku: String,
    price_unit: Decimal,
    quantity: i32,
    category_id: i32,
}

impl ValidatedProduct {
    /// Checks run in order and stop at the first violation
    fn from_payload(dto: &ProductPayloadDto) -> Result<Self> {
        let title = require_text(dto.title.as_deref(), "Product title is required")?;
        let image_url = require_text(dto.image_url.as_deref(), "Product image URL is required")?;
        let sku = require_text(dto.sku.as_deref(), "Product SKU is required")?;
        let price_unit = require_storable_price(require_present(
            dto.price_unit,
            "Product price is required",
        )?)?;
        let quantity = require_non_negative_quantity(require_present(
            dto.quantity,
            "Product quantity is required",
        )?)?;
        let category = require_present(dto.category.as_ref(), "Product category is required")?;
        let category_id = require_present(category.id, "Product category ID is required")?;

        Ok(Self {
            title,
            image_url,
            sku,
            price_unit,
            quantity,
            category_id,
        })
    }

    fn into_save(self, id: Option<i32>, category: &Category) -> SaveProduct {
        SaveProduct {
            id,
            title: self.title,
            image_url: self.image_url,
            sku: self.sku,
            price_unit: self.price_unit,
            quantity: self.quantity,
            category_id: category.id,
        }
    }
}

/// Service for product lifecycle operations
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
    feature_flags: Arc<dyn FeatureFlagGateway>,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
        feature_flags: Arc<dyn FeatureFlagGateway>,
    ) -> Self {
        Self {
            products,
            categories,
            feature_flags,
        }
    }

    /// List products that are not soft-deleted, at display price
    pub async fn list(&self) -> Result<Vec<ProductResponseDto>> {
        let products = self.products.find_all_excluding_deleted().await?;
        let discount_active = self.discount_active().await?;

        Ok(products
            .into_iter()
            .map(|p| ProductResponseDto::priced(p, discount_active))
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ProductResponseDto> {
        let product = self
            .products
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| product_not_found(id))?;
        let discount_active = self.discount_active().await?;

        Ok(ProductResponseDto::priced(product, discount_active))
    }

    pub async fn create(&self, dto: ProductPayloadDto) -> Result<ProductResponseDto> {
        let validated = ValidatedProduct::from_payload(&dto)?;
        let category = self.resolve_category(validated.category_id).await?;

        let product = self
            .products
            .save(validated.into_save(None, &category))
            .await?;

        tracing::info!(
            "Product {} created in category {}",
            product.id,
            product.category.id
        );

        Ok(product.into())
    }

    /// Full replace; a missing identifier refers to no product at all
    pub async fn update(&self, dto: ProductPayloadDto) -> Result<ProductResponseDto> {
        let id = dto
            .id
            .ok_or_else(|| AppError::NotFound("Product ID is required for update".to_string()))?;

        if !self.products.exists_by_id(id).await? {
            return Err(product_not_found(id));
        }

        let validated = ValidatedProduct::from_payload(&dto)?;
        let category = self.resolve_category(validated.category_id).await?;

        let product = self
            .products
            .save(validated.into_save(Some(id), &category))
            .await?;

        tracing::info!("Product {} updated", product.id);

        Ok(product.into())
    }

    /// Merge the supplied fields onto the stored product
    pub async fn update_by_id(&self, id: i32, patch: ProductPatchDto) -> Result<ProductResponseDto> {
        let existing = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| product_not_found(id))?;

        let mut merged = SaveProduct::from(&existing);

        if patch.title.is_some() {
            merged.title = require_text(patch.title.as_deref(), "Product title must not be blank")?;
        }
        if patch.image_url.is_some() {
            merged.image_url =
                require_text(patch.image_url.as_deref(), "Product image URL must not be blank")?;
        }
        if patch.sku.is_some() {
            merged.sku = require_text(patch.sku.as_deref(), "Product SKU must not be blank")?;
        }
        if let Some(price_unit) = patch.price_unit {
            merged.price_unit = require_storable_price(price_unit)?;
        }
        if let Some(quantity) = patch.quantity {
            merged.quantity = require_non_negative_quantity(quantity)?;
        }
        if let Some(category_id) = patch.category.and_then(|c| c.id) {
            merged.category_id = self.resolve_category(category_id).await?.id;
        }

        let product = self.products.save(merged).await?;

        tracing::info!("Product {} patched", product.id);

        Ok(product.into())
    }

    /// Soft delete: the row stays, owned by the "Deleted" sentinel
    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        let product = self
            .products
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| product_not_found(id))?;

        let deleted = self
            .categories
            .find_by_title(DELETED_CATEGORY_TITLE)
            .await?
            .ok_or_else(|| {
                AppError::InconsistentState(format!(
                    "Sentinel category '{}' is missing",
                    DELETED_CATEGORY_TITLE
                ))
            })?;

        let mut row = SaveProduct::from(&product);
        row.category_id = deleted.id;
        self.products.save(row).await?;

        tracing::info!(
            "Product {} soft-deleted (moved from category {})",
            product.id,
            product.category.id
        );

        Ok(())
    }

    /// Look up a category for assignment; the "Deleted" bucket is off limits
    async fn resolve_category(&self, category_id: i32) -> Result<Category> {
        let category = self
            .categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Category with id {} not found", category_id))
            })?;

        if titles_match(&category.title, DELETED_CATEGORY_TITLE) {
            return Err(AppError::Validation(format!(
                "Products can not be assigned to the '{}' category",
                DELETED_CATEGORY_TITLE
            )));
        }

        Ok(category)
    }

    async fn discount_active(&self) -> Result<bool> {
        self.feature_flags.is_active(PRODUCT_DISCOUNT_FEATURE).await
    }
}

fn product_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product with id {} not found", id))
}
