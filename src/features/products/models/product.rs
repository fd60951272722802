use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::features::categories::models::Category;

/// Product together with the category that owns it
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub sku: String,
    pub price_unit: Decimal,
    pub quantity: i32,
    pub category: Category,
}

/// Flat row of `products` joined with `categories`
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub sku: String,
    pub price_unit: Decimal,
    pub quantity: i32,
    pub category_id: i32,
    pub category_title: String,
    pub category_image_url: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            image_url: row.image_url,
            sku: row.sku,
            price_unit: row.price_unit,
            quantity: row.quantity,
            category: Category {
                id: row.category_id,
                title: row.category_title,
                image_url: row.category_image_url,
            },
        }
    }
}

/// Product row to persist; `id: None` inserts, `Some` overwrites that row
#[derive(Debug, Clone, PartialEq)]
pub struct SaveProduct {
    pub id: Option<i32>,
    pub title: String,
    pub image_url: String,
    pub sku: String,
    pub price_unit: Decimal,
    pub quantity: i32,
    pub category_id: i32,
}

impl From<&Product> for SaveProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            title: product.title.clone(),
            image_url: product.image_url.clone(),
            sku: product.sku.clone(),
            price_unit: product.price_unit,
            quantity: product.quantity,
            category_id: product.category.id,
        }
    }
}
