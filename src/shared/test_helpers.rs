//! In-memory gateways for service and router tests.

#[cfg(test)]
pub use fakes::*;

#[cfg(test)]
mod fakes {
    use std::collections::BTreeMap;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use sqlx::types::Json;

    use crate::core::error::{AppError, Result};
    use crate::features::categories::models::{Category, SaveCategory};
    use crate::features::categories::repositories::CategoryRepository;
    use crate::features::feature_flags::models::FeatureFlag;
    use crate::features::feature_flags::repositories::FeatureFlagGateway;
    use crate::features::products::models::{Product, SaveProduct};
    use crate::features::products::repositories::ProductRepository;
    use crate::shared::constants::{DELETED_CATEGORY_TITLE, NO_CATEGORY_TITLE};
    use crate::shared::validation::{is_reserved_title, titles_match};

    /// Failure the fakes raise where Postgres would reject the write
    fn store_error(message: String) -> AppError {
        AppError::Database(sqlx::Error::Protocol(message))
    }

    pub fn price(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[derive(Default)]
    struct CatalogState {
        next_category_id: i32,
        next_product_id: i32,
        categories: BTreeMap<i32, Category>,
        products: BTreeMap<i32, SaveProduct>,
    }

    impl CatalogState {
        fn join(&self, row: &SaveProduct) -> Product {
            let category = self.categories[&row.category_id].clone();
            Product {
                id: row.id.unwrap_or_default(),
                title: row.title.clone(),
                image_url: row.image_url.clone(),
                sku: row.sku.clone(),
                price_unit: row.price_unit,
                quantity: row.quantity,
                category,
            }
        }

        fn is_active(&self, row: &SaveProduct) -> bool {
            self.categories[&row.category_id].title != DELETED_CATEGORY_TITLE
        }
    }

    /// Categories and products in one store, with counters for write calls
    #[derive(Default)]
    pub struct InMemoryCatalog {
        state: Mutex<CatalogState>,
        category_saves: AtomicUsize,
        category_deletes: AtomicUsize,
        product_saves: AtomicUsize,
        reassign_calls: AtomicUsize,
    }

    impl InMemoryCatalog {
        pub fn new() -> Self {
            Self::default()
        }

        /// Store seeded with the "Deleted" and "No Category" sentinels
        pub fn with_sentinels() -> Self {
            let store = Self::new();
            store.insert_category(DELETED_CATEGORY_TITLE);
            store.insert_category(NO_CATEGORY_TITLE);
            store
        }

        /// Seed a category without going through `save`
        pub fn insert_category(&self, title: &str) -> Category {
            let mut state = self.state.lock().unwrap();
            state.next_category_id += 1;
            let category = Category {
                id: state.next_category_id,
                title: title.to_string(),
                image_url: None,
            };
            state.categories.insert(category.id, category.clone());
            category
        }

        /// Seed a product without going through `save`
        pub fn insert_product(&self, title: &str, price_unit: &str, category_id: i32) -> Product {
            let mut state = self.state.lock().unwrap();
            state.next_product_id += 1;
            let row = SaveProduct {
                id: Some(state.next_product_id),
                title: title.to_string(),
                image_url: format!("https://example.com/{}.jpg", title.to_lowercase()),
                sku: format!("SKU-{:03}", state.next_product_id),
                price_unit: price(price_unit),
                quantity: 10,
                category_id,
            };
            let product = state.join(&row);
            state.products.insert(product.id, row);
            product
        }

        pub fn categories(&self) -> Vec<Category> {
            self.state
                .lock()
                .unwrap()
                .categories
                .values()
                .cloned()
                .collect()
        }

        pub fn category_titled(&self, title: &str) -> Option<Category> {
            self.categories().into_iter().find(|c| c.title == title)
        }

        /// Raw product row, soft-deleted ones included
        pub fn product_row(&self, id: i32) -> Option<Product> {
            let state = self.state.lock().unwrap();
            state.products.get(&id).map(|row| state.join(row))
        }

        pub fn category_saves(&self) -> usize {
            self.category_saves.load(Ordering::SeqCst)
        }

        pub fn category_deletes(&self) -> usize {
            self.category_deletes.load(Ordering::SeqCst)
        }

        pub fn product_saves(&self) -> usize {
            self.product_saves.load(Ordering::SeqCst)
        }

        pub fn reassign_calls(&self) -> usize {
            self.reassign_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CategoryRepository for InMemoryCatalog {
        async fn find_by_id(&self, id: i32) -> Result<Option<Category>> {
            Ok(self.state.lock().unwrap().categories.get(&id).cloned())
        }

        async fn find_by_title(&self, title: &str) -> Result<Option<Category>> {
            Ok(self.category_titled(title))
        }

        async fn find_by_title_ignore_case(&self, title: &str) -> Result<Option<Category>> {
            Ok(self
                .categories()
                .into_iter()
                .find(|c| titles_match(&c.title, title)))
        }

        async fn exists_by_title_ignore_case(&self, title: &str) -> Result<bool> {
            Ok(self.find_by_title_ignore_case(title).await?.is_some())
        }

        async fn exists_by_title_ignore_case_excluding_id(
            &self,
            title: &str,
            id: i32,
        ) -> Result<bool> {
            Ok(self
                .categories()
                .iter()
                .any(|c| c.id != id && titles_match(&c.title, title)))
        }

        async fn find_all_excluding_sentinels(&self) -> Result<Vec<Category>> {
            Ok(self
                .categories()
                .into_iter()
                .filter(|c| !is_reserved_title(&c.title))
                .collect())
        }

        async fn save(&self, category: SaveCategory) -> Result<Category> {
            self.category_saves.fetch_add(1, Ordering::SeqCst);
            let mut state = self.state.lock().unwrap();

            let id = match category.id {
                Some(id) if state.categories.contains_key(&id) => id,
                Some(id) => {
                    return Err(store_error(format!("no category row {}", id)));
                }
                None => {
                    state.next_category_id += 1;
                    state.next_category_id
                }
            };

            let saved = Category {
                id,
                title: category.title,
                image_url: category.image_url,
            };
            state.categories.insert(id, saved.clone());
            Ok(saved)
        }

        async fn delete(&self, id: i32) -> Result<()> {
            self.category_deletes.fetch_add(1, Ordering::SeqCst);
            let mut state = self.state.lock().unwrap();

            if state.products.values().any(|p| p.category_id == id) {
                return Err(store_error(format!(
                    "category {} still referenced by products",
                    id
                )));
            }
            state.categories.remove(&id);
            Ok(())
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryCatalog {
        async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
            Ok(self.product_row(id))
        }

        async fn find_active_by_id(&self, id: i32) -> Result<Option<Product>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .products
                .get(&id)
                .filter(|row| state.is_active(row))
                .map(|row| state.join(row)))
        }

        async fn exists_by_id(&self, id: i32) -> Result<bool> {
            Ok(self.state.lock().unwrap().products.contains_key(&id))
        }

        async fn find_all_excluding_deleted(&self) -> Result<Vec<Product>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .products
                .values()
                .filter(|row| state.is_active(row))
                .map(|row| state.join(row))
                .collect())
        }

        async fn save(&self, product: SaveProduct) -> Result<Product> {
            self.product_saves.fetch_add(1, Ordering::SeqCst);
            let mut state = self.state.lock().unwrap();

            if !state.categories.contains_key(&product.category_id) {
                return Err(store_error(format!(
                    "no category row {}",
                    product.category_id
                )));
            }

            let id = match product.id {
                Some(id) => id,
                None => {
                    state.next_product_id += 1;
                    state.next_product_id
                }
            };

            let row = SaveProduct {
                id: Some(id),
                ..product
            };
            let saved = state.join(&row);
            state.products.insert(id, row);
            Ok(saved)
        }

        async fn reassign_category_for_products(
            &self,
            old_category_id: i32,
            new_category: &Category,
        ) -> Result<u64> {
            self.reassign_calls.fetch_add(1, Ordering::SeqCst);
            let mut state = self.state.lock().unwrap();

            let mut moved = 0;
            for row in state.products.values_mut() {
                if row.category_id == old_category_id {
                    row.category_id = new_category.id;
                    moved += 1;
                }
            }
            Ok(moved)
        }
    }

    /// Feature flags held in memory, counting `is_active` reads
    #[derive(Default)]
    pub struct InMemoryFeatureFlags {
        flags: Mutex<BTreeMap<String, FeatureFlag>>,
        reads: AtomicUsize,
    }

    impl InMemoryFeatureFlags {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_flag(name: &str, enabled: bool) -> Self {
            let flags = Self::new();
            flags
                .flags
                .lock()
                .unwrap()
                .insert(name.to_string(), flag(name, enabled));
            flags
        }

        pub fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    fn flag(name: &str, enabled: bool) -> FeatureFlag {
        FeatureFlag {
            name: name.to_string(),
            enabled,
            strategy: None,
            params: Json(Default::default()),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl FeatureFlagGateway for InMemoryFeatureFlags {
        async fn is_active(&self, name: &str) -> Result<bool> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .flags
                .lock()
                .unwrap()
                .get(name)
                .is_some_and(|f| f.enabled))
        }

        async fn find_all(&self) -> Result<Vec<FeatureFlag>> {
            Ok(self.flags.lock().unwrap().values().cloned().collect())
        }

        async fn set_enabled(&self, name: &str, enabled: bool) -> Result<FeatureFlag> {
            let updated = flag(name, enabled);
            self.flags
                .lock()
                .unwrap()
                .insert(name.to_string(), updated.clone());
            Ok(updated)
        }
    }
}
