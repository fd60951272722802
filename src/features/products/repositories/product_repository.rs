use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::products::models::{Product, ProductRow, SaveProduct};
use crate::shared::constants::DELETED_CATEGORY_TITLE;

/// Product side of the persistence gateway.
///
/// "Active" means not owned by the `Deleted` sentinel category.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Any product row, soft-deleted ones included
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>>;

    async fn find_active_by_id(&self, id: i32) -> Result<Option<Product>>;

    async fn exists_by_id(&self, id: i32) -> Result<bool>;

    async fn find_all_excluding_deleted(&self) -> Result<Vec<Product>>;

    async fn save(&self, product: SaveProduct) -> Result<Product>;

    /// Move every product of `old_category_id` to `new_category` in one statement.
    /// Returns the number of products moved.
    async fn reassign_category_for_products(
        &self,
        old_category_id: i32,
        new_category: &Category,
    ) -> Result<u64>;
}

const SELECT_PRODUCT: &str = r#"
    SELECT p.id, p.title, p.image_url, p.sku, p.price_unit, p.quantity,
           c.id AS category_id, c.title AS category_title, c.image_url AS category_image_url
    FROM products p
    JOIN categories c ON c.id = p.category_id
"#;

/// PostgreSQL-backed product gateway
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(context: &str, e: sqlx::Error) -> AppError {
    tracing::error!("{}: {:?}", context, e);
    AppError::Database(e)
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{SELECT_PRODUCT} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to get product by id", e))?;

        Ok(row.map(Product::from))
    }

    async fn find_active_by_id(&self, id: i32) -> Result<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "{SELECT_PRODUCT} WHERE p.id = $1 AND c.title <> $2"
        ))
        .bind(id)
        .bind(DELETED_CATEGORY_TITLE)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to get product by id", e))?;

        Ok(row.map(Product::from))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to check product", e))
    }

    async fn find_all_excluding_deleted(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "{SELECT_PRODUCT} WHERE c.title <> $1 ORDER BY p.id"
        ))
        .bind(DELETED_CATEGORY_TITLE)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list products", e))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn save(&self, product: SaveProduct) -> Result<Product> {
        let write = match product.id {
            None => {
                r#"
                INSERT INTO products (title, image_url, sku, price_unit, quantity, category_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, title, image_url, sku, price_unit, quantity, category_id
                "#
            }
            Some(_) => {
                r#"
                UPDATE products
                SET title = $1, image_url = $2, sku = $3, price_unit = $4,
                    quantity = $5, category_id = $6, updated_at = NOW()
                WHERE id = $7
                RETURNING id, title, image_url, sku, price_unit, quantity, category_id
                "#
            }
        };

        let sql = format!(
            r#"
            WITH saved AS ({write})
            SELECT saved.id, saved.title, saved.image_url, saved.sku, saved.price_unit,
                   saved.quantity, saved.category_id,
                   c.title AS category_title, c.image_url AS category_image_url
            FROM saved
            JOIN categories c ON c.id = saved.category_id
            "#
        );

        let mut query = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(&product.title)
            .bind(&product.image_url)
            .bind(&product.sku)
            .bind(product.price_unit)
            .bind(product.quantity)
            .bind(product.category_id);

        if let Some(id) = product.id {
            query = query.bind(id);
        }

        let row = query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to save product", e))?;

        Ok(row.into())
    }

    async fn reassign_category_for_products(
        &self,
        old_category_id: i32,
        new_category: &Category,
    ) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET category_id = $1, updated_at = NOW()
            WHERE category_id = $2
            "#,
        )
        .bind(new_category.id)
        .bind(old_category_id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to reassign products", e))?;

        Ok(result.rows_affected())
    }
}
