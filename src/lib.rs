//! Product Catalog - A product catalog service with a cache-first read path
//!
//! Reads are served from an in-process cache and filled from the document
//! store on a miss. Writes go to the asset and document stores, then drop
//! exactly the cached views they may have changed.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use catalog::ProductCatalog;
pub use config::Config;
pub use error::{CatalogError, Result};
pub use tasks::spawn_upload_sweeper;
