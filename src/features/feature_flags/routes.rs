use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::feature_flags::handlers;
use crate::features::feature_flags::services::FeatureFlagService;

/// Create routes for feature flag administration
pub fn routes(service: Arc<FeatureFlagService>) -> Router {
    Router::new()
        .route("/api/actuator/features", get(handlers::list_feature_flags))
        .route(
            "/api/actuator/features/{name}",
            post(handlers::toggle_feature_flag),
        )
        .with_state(service)
}
