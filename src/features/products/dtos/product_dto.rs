use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::products::models::Product;
use crate::features::products::pricing::display_price;

/// Response DTO for product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub sku: String,
    #[schema(value_type = String, example = "999.99")]
    pub price_unit: Decimal,
    pub quantity: i32,
    pub category: CategoryResponseDto,
}

impl ProductResponseDto {
    /// Read-path view, with the discount applied when active
    pub fn priced(product: Product, discount_active: bool) -> Self {
        let mut dto = Self::from(product);
        dto.price_unit = display_price(dto.price_unit, discount_active);
        dto
    }
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            title: p.title,
            image_url: p.image_url,
            sku: p.sku,
            price_unit: p.price_unit,
            quantity: p.quantity,
            category: p.category.into(),
        }
    }
}

/// Reference to the owning category inside product payloads
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CategoryRefDto {
    pub id: Option<i32>,
}

/// Request DTO for creating or fully replacing a product
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductPayloadDto {
    pub id: Option<i32>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Image URL must be at most 255 characters"))]
    pub image_url: Option<String>,

    #[validate(length(max = 255, message = "SKU must be at most 255 characters"))]
    pub sku: Option<String>,

    #[schema(value_type = Option<String>, example = "999.99")]
    pub price_unit: Option<Decimal>,

    pub quantity: Option<i32>,

    pub category: Option<CategoryRefDto>,
}

/// Request DTO for partial product update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductPatchDto {
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Image URL must be at most 255 characters"))]
    pub image_url: Option<String>,

    #[validate(length(max = 255, message = "SKU must be at most 255 characters"))]
    pub sku: Option<String>,

    #[schema(value_type = Option<String>, example = "999.99")]
    pub price_unit: Option<Decimal>,

    pub quantity: Option<i32>,

    /// Moves the product when an identifier is given
    pub category: Option<CategoryRefDto>,
}
