//! Product lifecycle.
//!
//! Deleting a product is a soft delete: the row is kept and moved to the
//! `Deleted` sentinel category, which hides it from every product read.
//! Read paths run prices through [`pricing::display_price`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/products` | List active products |
//! | POST | `/api/products` | Create product |
//! | PUT | `/api/products` | Replace product (id in body) |
//! | GET | `/api/products/{id}` | Get active product |
//! | PUT | `/api/products/{id}` | Partially update product |
//! | DELETE | `/api/products/{id}` | Soft-delete product |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod pricing;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgProductRepository, ProductRepository};
pub use services::ProductService;
