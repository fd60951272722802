use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, SaveCategory};
use crate::shared::constants::{DELETED_CATEGORY_TITLE, NO_CATEGORY_TITLE};

/// Category side of the persistence gateway
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>>;

    /// Exact, case-sensitive title lookup
    async fn find_by_title(&self, title: &str) -> Result<Option<Category>>;

    async fn find_by_title_ignore_case(&self, title: &str) -> Result<Option<Category>>;

    async fn exists_by_title_ignore_case(&self, title: &str) -> Result<bool>;

    async fn exists_by_title_ignore_case_excluding_id(&self, title: &str, id: i32)
        -> Result<bool>;

    /// Every category except the two sentinels, in store order
    async fn find_all_excluding_sentinels(&self) -> Result<Vec<Category>>;

    async fn save(&self, category: SaveCategory) -> Result<Category>;

    async fn delete(&self, id: i32) -> Result<()>;
}

/// PostgreSQL-backed category gateway
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(context: &str, e: sqlx::Error) -> AppError {
    tracing::error!("{}: {:?}", context, e);
    AppError::Database(e)
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, title, image_url FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to get category by id", e))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT id, title, image_url FROM categories WHERE title = $1",
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to get category by title", e))
    }

    async fn find_by_title_ignore_case(&self, title: &str) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT id, title, image_url FROM categories WHERE LOWER(title) = LOWER($1)",
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to get category by title", e))
    }

    async fn exists_by_title_ignore_case(&self, title: &str) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE LOWER(title) = LOWER($1))",
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to check category title", e))
    }

    async fn exists_by_title_ignore_case_excluding_id(
        &self,
        title: &str,
        id: i32,
    ) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM categories WHERE LOWER(title) = LOWER($1) AND id <> $2
            )
            "#,
        )
        .bind(title)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to check category title", e))
    }

    async fn find_all_excluding_sentinels(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, title, image_url
            FROM categories
            WHERE LOWER(title) NOT IN (LOWER($1), LOWER($2))
            ORDER BY id
            "#,
        )
        .bind(DELETED_CATEGORY_TITLE)
        .bind(NO_CATEGORY_TITLE)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list categories", e))
    }

    async fn save(&self, category: SaveCategory) -> Result<Category> {
        let query = match category.id {
            None => sqlx::query_as::<_, Category>(
                r#"
                INSERT INTO categories (title, image_url)
                VALUES ($1, $2)
                RETURNING id, title, image_url
                "#,
            )
            .bind(&category.title)
            .bind(&category.image_url),
            Some(id) => sqlx::query_as::<_, Category>(
                r#"
                UPDATE categories
                SET title = $1, image_url = $2, updated_at = NOW()
                WHERE id = $3
                RETURNING id, title, image_url
                "#,
            )
            .bind(&category.title)
            .bind(&category.image_url)
            .bind(id),
        };

        query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to save category", e))
    }

    async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete category", e))?;

        Ok(())
    }
}
