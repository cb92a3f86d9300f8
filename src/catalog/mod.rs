//! Catalog Module
//!
//! `ProductCatalog` serves reads cache-first and performs writes against the
//! document and asset stores, invalidating cached views only after a
//! mutation has fully succeeded.
//!
//! # Cache keys
//! - `latest-products`: five newest products
//! - `categories`: distinct categories
//! - `all-products`: unfiltered admin listing
//! - `product-{id}`: one product
//!
//! Creation drops the three aggregate keys. Update and delete drop the
//! aggregates plus the product's own key. Search is never cached.
//!
//! Readers and writers are not serialized against each other: a reader that
//! fetched before an invalidation may repopulate a key with the older
//! snapshot. The next invalidation or restart corrects it.

mod fields;
mod search;
mod staged;

use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cache::{Cache, CacheKey, Invalidation};
use crate::error::{CatalogError, Result};
use crate::store::{
    AssetStore, DocumentStore, FindOptions, Photo, Product, ProductField, ProductFilter,
    ProductSort,
};

pub use fields::{ProductDraft, ProductFields, ProductPatch};
pub use search::{SearchPage, SearchQuery, SortDirection};
pub use staged::StagedFile;

/// Number of products in the latest listing.
pub const LATEST_LIMIT: usize = 5;

/// Default search page size.
pub const DEFAULT_PAGE_SIZE: usize = 8;

// == Photo Swap ==
/// How an update replaces an existing photo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhotoSwap {
    /// Upload the new asset and delete the old one at the same time. If one
    /// fails after the other completed, the update fails and the completed
    /// half is not undone.
    #[default]
    Concurrent,
    /// Delete the old asset only once the new upload succeeded.
    Sequential,
}

impl FromStr for PhotoSwap {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "concurrent" => Ok(PhotoSwap::Concurrent),
            "sequential" => Ok(PhotoSwap::Sequential),
            other => Err(CatalogError::Validation(format!(
                "unknown photo swap mode: {}",
                other
            ))),
        }
    }
}

// == Product Catalog ==
#[derive(Clone)]
pub struct ProductCatalog {
    documents: Arc<dyn DocumentStore>,
    assets: Arc<dyn AssetStore>,
    cache: Arc<dyn Cache>,
    page_size: usize,
    photo_swap: PhotoSwap,
}

impl ProductCatalog {
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        assets: Arc<dyn AssetStore>,
        cache: Arc<dyn Cache>,
    ) -> Self {
        Self {
            documents,
            assets,
            cache,
            page_size: DEFAULT_PAGE_SIZE,
            photo_swap: PhotoSwap::default(),
        }
    }

    /// Sets the search page size. Zero keeps the current size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    pub fn with_photo_swap(mut self, photo_swap: PhotoSwap) -> Self {
        self.photo_swap = photo_swap;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    // == Reads ==

    /// The five most recently created products.
    pub async fn latest(&self) -> Result<Vec<Product>> {
        self.read_through(CacheKey::Latest, move || async move {
            let options = FindOptions::sorted(ProductSort::CreatedDesc).limit(LATEST_LIMIT);
            self.documents
                .find(&ProductFilter::default(), options)
                .await
        })
        .await
    }

    /// Every distinct category.
    pub async fn categories(&self) -> Result<Vec<String>> {
        self.read_through(CacheKey::Categories, move || async move {
            self.documents.distinct(ProductField::Category).await
        })
        .await
    }

    /// Every product, unfiltered.
    pub async fn admin_listing(&self) -> Result<Vec<Product>> {
        self.read_through(CacheKey::AdminListing, move || async move {
            self.documents
                .find(&ProductFilter::default(), FindOptions::default())
                .await
        })
        .await
    }

    /// One product by id. A missing product is reported and never cached.
    pub async fn get_by_id(&self, id: &str) -> Result<Product> {
        self.read_through(CacheKey::Product(id.to_string()), move || async move {
            self.find_existing(id).await
        })
        .await
    }

    /// Filtered, paginated listing straight from the document store.
    ///
    /// Issues the page query and an unpaged count query together so the
    /// page count stays correct for any page; that costs a second store
    /// round trip per search.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let filter = query.filter();
        // Pages past the end are empty, however large the page number
        let mut options = FindOptions::default()
            .skip((query.page() - 1).saturating_mul(self.page_size))
            .limit(self.page_size);
        options.sort = query.sort.map(ProductSort::from);

        let (products, matching) = tokio::try_join!(
            self.documents.find(&filter, options),
            self.documents.find(&filter, FindOptions::default())
        )?;

        Ok(SearchPage {
            products,
            total_page: matching.len().div_ceil(self.page_size),
        })
    }

    // == Writes ==

    /// Creates a product from `fields` and a staged photo.
    ///
    /// The photo is uploaded before the document is created. If creation
    /// fails after the upload, the uploaded asset is left behind.
    pub async fn create(&self, fields: ProductFields, photo: Option<StagedFile>) -> Result<Product> {
        let photo = photo
            .ok_or_else(|| CatalogError::Validation("Please add Photo".to_string()))?;
        let draft = fields.into_patch()?.into_draft()?;

        let uploaded = self.assets.upload(photo.path()).await?;
        let product = self.documents.create(draft.with_photo(uploaded)).await?;
        photo.cleanup().await;

        info!(id = %product.id, name = %product.name, "product created");
        self.invalidate(Invalidation::created());
        Ok(product)
    }

    /// Applies the present fields of `fields` to an existing product,
    /// replacing its photo when one is supplied.
    pub async fn update(
        &self,
        id: &str,
        fields: ProductFields,
        photo: Option<StagedFile>,
    ) -> Result<Product> {
        let mut product = self.find_existing(id).await?;
        let patch = fields.into_patch()?;

        if let Some(staged) = photo {
            let uploaded = self.swap_photo(&product.photo, &staged).await?;
            staged.cleanup().await;
            product.photo = uploaded;
        }
        patch.apply(&mut product);

        self.documents.save(&product).await?;

        info!(id = %product.id, "product updated");
        self.invalidate(Invalidation::changed(product.id.clone()));
        Ok(product)
    }

    /// Removes a product and its photo asset.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let product = self.find_existing(id).await?;

        self.assets.delete(&product.photo.public_id).await?;
        self.documents.delete_one(&product).await?;

        info!(id = %product.id, "product deleted");
        self.invalidate(Invalidation::changed(product.id));
        Ok(())
    }

    // == Internals ==

    async fn find_existing(&self, id: &str) -> Result<Product> {
        self.documents
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    async fn swap_photo(&self, old: &Photo, staged: &StagedFile) -> Result<Photo> {
        match self.photo_swap {
            PhotoSwap::Concurrent => {
                let (uploaded, ()) = tokio::try_join!(
                    self.assets.upload(staged.path()),
                    self.assets.delete(&old.public_id)
                )?;
                Ok(uploaded)
            }
            PhotoSwap::Sequential => {
                let uploaded = self.assets.upload(staged.path()).await?;
                self.assets.delete(&old.public_id).await?;
                Ok(uploaded)
            }
        }
    }

    /// Serves `key` from the cache, or runs `fetch` and caches its result.
    async fn read_through<T, F, Fut>(&self, key: CacheKey, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(raw) = self.cache.get(&key) {
            match serde_json::from_str(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => warn!(key = %key, error = %e, "discarding unreadable cache entry"),
            }
        }

        let value = fetch().await?;
        let raw = serde_json::to_string(&value)
            .map_err(|e| CatalogError::Internal(format!("serialize {}: {}", key, e)))?;
        self.cache.set(&key, raw);
        debug!(key = %key, "cache populated");
        Ok(value)
    }

    fn invalidate(&self, invalidation: Invalidation) {
        let keys = invalidation.keys();
        let removed = self.cache.invalidate(&keys);
        debug!(keys = ?keys, removed, "invalidated cached views");
    }
}
