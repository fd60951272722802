//! Category lifecycle.
//!
//! Two reserved categories, `Deleted` and `No Category`, act as sentinel
//! buckets for soft-deleted products and for products of deleted categories.
//! They are seeded by migration and hidden from every category read.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | List user categories |
//! | POST | `/api/categories` | Create category |
//! | PUT | `/api/categories` | Update category (id in body) |
//! | GET | `/api/categories/{id}` | Get category |
//! | PUT | `/api/categories/{id}` | Update category |
//! | DELETE | `/api/categories/{id}` | Delete category, moving products to `No Category` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{CategoryRepository, PgCategoryRepository};
pub use services::CategoryService;
