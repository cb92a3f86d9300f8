//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `POST /api/v1/product/new` - Create a product (multipart)
//! - `GET /api/v1/product/all` - Search with filters and pagination
//! - `GET /api/v1/product/latest` - Five newest products
//! - `GET /api/v1/product/categories` - Distinct categories
//! - `GET /api/v1/product/admin-products` - Every product
//! - `GET|PUT|DELETE /api/v1/product/:id` - Read, update, delete one product
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod form;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, mount_assets};
