//! Process-local document store.
//!
//! Keeps products in insertion order behind an async lock. Used by the
//! binary when no external database is wired in, and by the tests.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{DocumentStore, FindOptions, NewProduct, Product, ProductField, ProductFilter};
use crate::error::{CatalogError, Result};

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    products: RwLock<Vec<Product>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find(&self, filter: &ProductFilter, options: FindOptions) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        let mut matching: Vec<Product> = products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        if let Some(sort) = options.sort {
            // Newest inserted first among equal keys
            matching.reverse();
            matching.sort_by(|a, b| sort.compare(a, b));
        }

        let skip = options.skip.unwrap_or(0);
        let limit = options.limit.unwrap_or(usize::MAX);
        Ok(matching.into_iter().skip(skip).take(limit).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn distinct(&self, field: ProductField) -> Result<Vec<String>> {
        let products = self.products.read().await;
        let values: BTreeSet<&str> = products.iter().map(|p| field.value_of(p)).collect();
        Ok(values.into_iter().map(str::to_string).collect())
    }

    async fn create(&self, fields: NewProduct) -> Result<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().simple().to_string(),
            name: fields.name,
            price: fields.price,
            stock: fields.stock,
            category: fields.category,
            photo: fields.photo,
            created_at: now,
            updated_at: now,
        };

        self.products.write().await.push(product.clone());
        debug!(id = %product.id, "document created");
        Ok(product)
    }

    async fn save(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        let stored = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| {
                CatalogError::Store(format!("product {} no longer exists", product.id))
            })?;

        *stored = Product {
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..product.clone()
        };
        Ok(())
    }

    async fn delete_one(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != product.id);

        if products.len() == before {
            return Err(CatalogError::Store(format!(
                "product {} no longer exists",
                product.id
            )));
        }
        Ok(())
    }
}
