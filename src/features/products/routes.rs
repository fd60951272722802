use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Create routes for the products feature
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(handlers::list_products)
                .post(handlers::create_product)
                .put(handlers::update_product),
        )
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product_by_id)
                .delete(handlers::delete_product),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::feature_flags::{routes as feature_flag_routes, FeatureFlagService};
    use crate::features::products::dtos::ProductResponseDto;
    use crate::shared::constants::PRODUCT_DISCOUNT_FEATURE;
    use crate::shared::test_helpers::{price, InMemoryCatalog, InMemoryFeatureFlags};
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    struct Harness {
        store: Arc<InMemoryCatalog>,
        server: TestServer,
    }

    fn harness() -> Harness {
        let store = Arc::new(InMemoryCatalog::with_sentinels());
        let flags = Arc::new(InMemoryFeatureFlags::with_flag(
            PRODUCT_DISCOUNT_FEATURE,
            false,
        ));
        let products = Arc::new(ProductService::new(
            store.clone(),
            store.clone(),
            flags.clone(),
        ));
        let app = routes(products).merge(feature_flag_routes::routes(Arc::new(
            FeatureFlagService::new(flags),
        )));

        Harness {
            store,
            server: TestServer::new(app).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_toggling_discount_changes_read_price() {
        let h = harness();
        let electronics = h.store.insert_category("Electronics");
        let laptop = h.store.insert_product("Laptop", "999.99", electronics.id);
        let path = format!("/api/products/{}", laptop.id);

        let before: ApiResponse<ProductResponseDto> = h.server.get(&path).await.json();
        assert_eq!(before.data.unwrap().price_unit, price("999.99"));

        h.server
            .post(&format!("/api/actuator/features/{}", PRODUCT_DISCOUNT_FEATURE))
            .json(&json!({ "enabled": true }))
            .await
            .assert_status_ok();

        let after: ApiResponse<ProductResponseDto> = h.server.get(&path).await.json();
        assert_eq!(after.data.unwrap().price_unit, price("799.992"));
    }

    #[tokio::test]
    async fn test_create_and_soft_delete_over_http() {
        let h = harness();
        let electronics = h.store.insert_category("Electronics");

        let created: ApiResponse<ProductResponseDto> = h
            .server
            .post("/api/products")
            .json(&json!({
                "title": "Phone",
                "image_url": "https://example.com/phone.jpg",
                "sku": "PHN-001",
                "price_unit": "500.00",
                "quantity": 5,
                "category": { "id": electronics.id }
            }))
            .await
            .json();
        let id = created.data.unwrap().id;

        h.server
            .delete(&format!("/api/products/{}", id))
            .await
            .assert_status_ok();
        h.server
            .get(&format!("/api/products/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
        assert_eq!(h.store.product_row(id).unwrap().category.title, "Deleted");
    }

    #[tokio::test]
    async fn test_create_without_category_is_bad_request() {
        let h = harness();

        h.server
            .post("/api/products")
            .json(&json!({
                "title": "Phone",
                "image_url": "https://example.com/phone.jpg",
                "sku": "PHN-001",
                "price_unit": "500.00",
                "quantity": 5
            }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(h.store.product_saves(), 0);
    }
}
