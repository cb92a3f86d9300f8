//! Invalidation Module
//!
//! Maps a description of what a mutation changed onto the set of cache keys
//! that must be dropped.

use super::CacheKey;

// == Invalidation Descriptor ==
/// Flags describing which cached views a mutation may have made stale.
///
/// - `product` covers the public aggregate views (latest, categories)
/// - `admin` covers the admin listing
/// - `product_id` names a single existing product whose record changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invalidation {
    pub product: bool,
    pub admin: bool,
    pub product_id: Option<String>,
}

impl Invalidation {
    /// Fan-out for a newly created product.
    ///
    /// No `product-{id}` key can exist for an id that did not exist before.
    pub fn created() -> Self {
        Self {
            product: true,
            admin: true,
            product_id: None,
        }
    }

    /// Fan-out for an update or delete of an existing product.
    pub fn changed(id: impl Into<String>) -> Self {
        Self {
            product: true,
            admin: true,
            product_id: Some(id.into()),
        }
    }

    /// Returns the keys this descriptor removes.
    pub fn keys(&self) -> Vec<CacheKey> {
        let mut keys = Vec::with_capacity(4);
        if self.product {
            keys.push(CacheKey::Latest);
            keys.push(CacheKey::Categories);
        }
        if self.admin {
            keys.push(CacheKey::AdminListing);
        }
        if let Some(id) = &self.product_id {
            keys.push(CacheKey::Product(id.clone()));
        }
        keys
    }
}
