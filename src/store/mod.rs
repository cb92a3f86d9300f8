//! Store Module
//!
//! The two external capabilities the catalog depends on, the product data
//! model they exchange, and process-local implementations of both.
//!
//! - `DocumentStore`: authoritative product records
//! - `AssetStore`: binary photo assets addressed by id and URL

mod local_asset;
mod memory;
mod product;
mod query;

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

pub use local_asset::LocalAssetStore;
pub use memory::MemoryDocumentStore;
pub use product::{NewProduct, Photo, Product};
pub use query::{FindOptions, ProductField, ProductFilter, ProductSort};

// == Document Store ==
/// Persistence for product records.
///
/// Failures surface as `CatalogError::Store`; nothing is retried.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns products matching `filter`, shaped by `options`.
    async fn find(&self, filter: &ProductFilter, options: FindOptions) -> Result<Vec<Product>>;

    /// Returns the product with the given id, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>>;

    /// Returns the distinct values of `field`, sorted.
    async fn distinct(&self, field: ProductField) -> Result<Vec<String>>;

    /// Inserts a new product and returns it with its store-assigned id and timestamps.
    async fn create(&self, fields: NewProduct) -> Result<Product>;

    /// Persists every field of an existing product.
    async fn save(&self, product: &Product) -> Result<()>;

    /// Removes an existing product.
    async fn delete_one(&self, product: &Product) -> Result<()>;
}

// == Asset Store ==
/// Remote storage for product photos.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Transfers the file at `path` and returns its asset id and URL.
    ///
    /// Fails with `CatalogError::Upload`.
    async fn upload(&self, path: &Path) -> Result<Photo>;

    /// Removes an asset. Deleting an asset that is already gone succeeds.
    ///
    /// Fails with `CatalogError::Delete`.
    async fn delete(&self, asset_id: &str) -> Result<()>;
}
