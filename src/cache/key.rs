//! Cache Key Module
//!
//! Closed set of cache key kinds and their string form.

use std::fmt;

// == Cache Key ==
/// Every key the catalog reads or invalidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Five most recently created products
    Latest,
    /// Distinct category list
    Categories,
    /// Unfiltered admin listing
    AdminListing,
    /// A single product by identifier
    Product(String),
}

impl CacheKey {
    /// Returns the string key stored in the cache.
    pub fn as_key(&self) -> String {
        match self {
            CacheKey::Latest => "latest-products".to_string(),
            CacheKey::Categories => "categories".to_string(),
            CacheKey::AdminListing => "all-products".to_string(),
            CacheKey::Product(id) => format!("product-{}", id),
        }
    }

    /// Returns true for keys spanning more than one product.
    pub fn is_aggregate(&self) -> bool {
        !matches!(self, CacheKey::Product(_))
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_strings() {
        assert_eq!(CacheKey::Latest.as_key(), "latest-products");
        assert_eq!(CacheKey::Categories.as_key(), "categories");
        assert_eq!(CacheKey::AdminListing.as_key(), "all-products");
        assert_eq!(CacheKey::Product("abc".into()).as_key(), "product-abc");
    }

    #[test]
    fn test_aggregate_kinds() {
        assert!(CacheKey::Latest.is_aggregate());
        assert!(CacheKey::Categories.is_aggregate());
        assert!(CacheKey::AdminListing.is_aggregate());
        assert!(!CacheKey::Product("abc".into()).is_aggregate());
    }

    #[test]
    fn test_display_matches_key() {
        let key = CacheKey::Product("42".into());
        assert_eq!(key.to_string(), key.as_key());
    }
}
