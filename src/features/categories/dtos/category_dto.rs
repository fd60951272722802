use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i32,
    pub title: String,
    pub image_url: Option<String>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            title: c.title,
            image_url: c.image_url,
        }
    }
}

/// Request DTO for creating or updating a category.
///
/// `id` is read by the full-replace update only; create ignores it and the
/// by-id update takes the identifier from the path instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoryPayloadDto {
    pub id: Option<i32>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Image URL must be at most 255 characters"))]
    pub image_url: Option<String>,
}
