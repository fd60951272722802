//! Feature flags gating catalog behaviour.
//!
//! Product reads consult `PRODUCT_DISCOUNT` through [`repositories::FeatureFlagGateway`];
//! administrators flip flags through the actuator endpoints.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/actuator/features` | List flags and their state |
//! | POST | `/api/actuator/features/{name}` | Enable or disable a flag |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{FeatureFlagGateway, PgFeatureFlagRepository};
pub use services::FeatureFlagService;
