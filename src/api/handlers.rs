//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};

use crate::api::form::read_product_form;
use crate::cache::MemoryCache;
use crate::catalog::ProductCatalog;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    CategoriesResponse, HealthResponse, MessageResponse, ProductResponse, ProductsResponse,
    SearchParams, SearchResponse, StatsResponse,
};
use crate::store::{LocalAssetStore, MemoryDocumentStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog operations
    pub catalog: ProductCatalog,
    /// Handle to the same cache the catalog uses, for statistics
    pub cache: MemoryCache,
    /// Where incoming photos are staged
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(catalog: ProductCatalog, cache: MemoryCache, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            cache,
            upload_dir: upload_dir.into(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Products are kept in process memory and photos in `config.asset_dir`.
    pub fn from_config(config: &Config) -> Self {
        let cache = MemoryCache::new();
        let catalog = ProductCatalog::new(
            Arc::new(MemoryDocumentStore::new()),
            Arc::new(LocalAssetStore::new(
                config.asset_dir.clone(),
                config.asset_base_url.clone(),
            )),
            Arc::new(cache.clone()),
        )
        .with_page_size(config.products_per_page)
        .with_photo_swap(config.photo_swap);

        Self::new(catalog, cache, config.upload_dir.clone())
    }
}

/// Handler for GET /api/v1/product/latest
pub async fn latest_handler(State(state): State<AppState>) -> Result<Json<ProductsResponse>> {
    let products = state.catalog.latest().await?;
    Ok(Json(ProductsResponse::new(products)))
}

/// Handler for GET /api/v1/product/categories
pub async fn categories_handler(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>> {
    let categories = state.catalog.categories().await?;
    Ok(Json(CategoriesResponse::new(categories)))
}

/// Handler for GET /api/v1/product/admin-products
pub async fn admin_products_handler(
    State(state): State<AppState>,
) -> Result<Json<ProductsResponse>> {
    let products = state.catalog.admin_listing().await?;
    Ok(Json(ProductsResponse::new(products)))
}

/// Handler for GET /api/v1/product/all
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let query = params.into_query()?;
    let page = state.catalog.search(&query).await?;
    Ok(Json(page.into()))
}

/// Handler for GET /api/v1/product/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>> {
    let product = state.catalog.get_by_id(&id).await?;
    Ok(Json(ProductResponse::new(product)))
}

/// Handler for POST /api/v1/product/new
pub async fn new_product_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MessageResponse>> {
    let (fields, photo) = read_product_form(multipart, &state.upload_dir).await?;
    state.catalog.create(fields, photo).await?;
    Ok(Json(MessageResponse::new("Product Created Successfully")))
}

/// Handler for PUT /api/v1/product/:id
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<MessageResponse>> {
    let (fields, photo) = read_product_form(multipart, &state.upload_dir).await?;
    state.catalog.update(&id, fields, photo).await?;
    Ok(Json(MessageResponse::new("Product Updated Successfully")))
}

/// Handler for DELETE /api/v1/product/:id
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.catalog.delete(&id).await?;
    Ok(Json(MessageResponse::new("Product Deleted Successfully")))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
