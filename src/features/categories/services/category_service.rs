use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryPayloadDto, CategoryResponseDto};
use crate::features::categories::models::{Category, SaveCategory};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::products::repositories::ProductRepository;
use crate::shared::constants::NO_CATEGORY_TITLE;
use crate::shared::validation::{is_reserved_title, require_present, require_text};

/// Service for category lifecycle operations
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// List every user category, hiding the sentinel buckets
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.categories.find_all_excluding_sentinels().await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get a user category by id. Sentinels read as not found.
    pub async fn get_by_id(&self, id: i32) -> Result<CategoryResponseDto> {
        self.categories
            .find_by_id(id)
            .await?
            .filter(|c| !c.is_reserved())
            .map(|c| c.into())
            .ok_or_else(|| category_not_found(id))
    }

    pub async fn create(&self, dto: CategoryPayloadDto) -> Result<CategoryResponseDto> {
        let title = require_text(dto.title.as_deref(), "Category title is required")?;

        if is_reserved_title(&title) {
            return Err(AppError::Validation(format!(
                "Category title '{}' is reserved",
                title
            )));
        }

        if self.categories.exists_by_title_ignore_case(&title).await? {
            return Err(duplicate_title(&title));
        }

        let category = self
            .categories
            .save(SaveCategory {
                id: None,
                title,
                image_url: dto.image_url,
            })
            .await?;

        tracing::info!("Category {} created: '{}'", category.id, category.title);

        Ok(category.into())
    }

    /// Full update, identifier taken from the payload
    pub async fn update(&self, dto: CategoryPayloadDto) -> Result<CategoryResponseDto> {
        let id = require_present(dto.id, "Category ID is required for update")?;
        self.apply_update(id, dto).await
    }

    /// Update by path identifier; any identifier in the payload is ignored
    pub async fn update_by_id(
        &self,
        id: i32,
        dto: CategoryPayloadDto,
    ) -> Result<CategoryResponseDto> {
        self.apply_update(id, dto).await
    }

    async fn apply_update(&self, id: i32, dto: CategoryPayloadDto) -> Result<CategoryResponseDto> {
        let title = require_text(dto.title.as_deref(), "Category title is required")?;

        let existing = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| category_not_found(id))?;

        ensure_reserved_status_kept(&existing, &title)?;

        if self
            .categories
            .exists_by_title_ignore_case_excluding_id(&title, id)
            .await?
        {
            return Err(duplicate_title(&title));
        }

        let category = self
            .categories
            .save(SaveCategory {
                id: Some(existing.id),
                title,
                image_url: dto.image_url,
            })
            .await?;

        tracing::info!("Category {} updated: '{}'", category.id, category.title);

        Ok(category.into())
    }

    /// Delete a user category after moving its products to "No Category".
    ///
    /// Products are reassigned before the row is removed so no product ever
    /// points at a missing category.
    pub async fn delete_by_id(&self, id: i32) -> Result<()> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| category_not_found(id))?;

        if category.is_reserved() {
            return Err(AppError::Validation(format!(
                "Reserved category '{}' can not be deleted",
                category.title
            )));
        }

        let fallback = self
            .categories
            .find_by_title_ignore_case(NO_CATEGORY_TITLE)
            .await?
            .ok_or_else(|| {
                AppError::InconsistentState(format!(
                    "Sentinel category '{}' is missing",
                    NO_CATEGORY_TITLE
                ))
            })?;

        let moved = self
            .products
            .reassign_category_for_products(category.id, &fallback)
            .await?;

        self.categories.delete(category.id).await?;

        tracing::info!(
            "Category {} deleted, {} products moved to '{}'",
            category.id,
            moved,
            fallback.title
        );

        Ok(())
    }
}

/// A sentinel keeps its exact title; a user category can not take a sentinel's title.
///
/// Soft delete and the active-product filters look sentinels up by exact
/// title, so even a re-cased sentinel title is a rename.
fn ensure_reserved_status_kept(existing: &Category, new_title: &str) -> Result<()> {
    if existing.is_reserved() && existing.title != new_title {
        return Err(AppError::Validation(format!(
            "Reserved category '{}' can not be renamed",
            existing.title
        )));
    }

    if !existing.is_reserved() && is_reserved_title(new_title) {
        return Err(AppError::Validation(format!(
            "Category title '{}' is reserved",
            new_title
        )));
    }

    Ok(())
}

fn category_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Category with id {} not found", id))
}

fn duplicate_title(title: &str) -> AppError {
    AppError::Validation(format!("Category with title '{}' already exists", title))
}
